//! 报告地图视图
//!
//! 不内嵌地图瓦片；带坐标的报告提供 OpenStreetMap 链接。

use crate::api::use_api;
use crate::components::common::{EmptyPanel, ErrorPanel, LoadState, ReportCard, Spinner};
use civicsync::analytics::ReportFilter;
use civicsync_shared::{REPORT_CATEGORIES, Report, ReportStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn MapViewPage() -> impl IntoView {
    let api = use_api();
    let reports = RwSignal::new(LoadState::<Vec<Report>>::Loading);
    let filter = RwSignal::new(ReportFilter::default());

    let load = move || {
        reports.set(LoadState::Loading);
        let gateway = api.gateway();
        spawn_local(async move {
            reports.set(LoadState::from_result(gateway.all_reports().await));
        });
    };
    load();

    let on_category = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        filter.update(|f| f.category = (!value.is_empty()).then_some(value));
    };
    let on_status = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        filter.update(|f| f.status = ReportStatus::parse(&value));
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Issue Map"</h1>
            <div class="flex flex-wrap gap-4">
                <select class="select select-bordered" on:change=on_category>
                    <option value="">"All categories"</option>
                    {REPORT_CATEGORIES
                        .into_iter()
                        .map(|c| view! { <option value=c>{c}</option> })
                        .collect_view()}
                </select>
                <select class="select select-bordered" on:change=on_status>
                    <option value="">"All statuses"</option>
                    {ReportStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            {move || match reports.get() {
                LoadState::Loading => view! { <Spinner /> }.into_any(),
                LoadState::Failed(message) => {
                    view! { <ErrorPanel message=message on_retry=move |_| load() /> }.into_any()
                }
                LoadState::Ready(list) => {
                    let visible: Vec<Report> = filter
                        .with(|f| f.apply(&list).into_iter().cloned().collect());
                    let located = visible.iter().filter(|r| r.coordinates().is_some()).count();
                    if visible.is_empty() {
                        view! { <EmptyPanel message="No reports match these filters." /> }.into_any()
                    } else {
                        view! {
                            <p class="text-sm text-base-content/60">
                                {format!("{} reports, {} with map coordinates", visible.len(), located)}
                            </p>
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                {visible
                                    .into_iter()
                                    .map(|report| view! { <ReportCard report=report /> })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }
            }}
        </div>
    }
}
