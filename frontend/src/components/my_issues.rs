use crate::api::use_api;
use crate::components::common::{EmptyPanel, ErrorPanel, LoadState, ReportCard, Spinner};
use crate::web::router::Link;
use civicsync::analytics::ReportFilter;
use civicsync_shared::route::AppRoute;
use civicsync_shared::{Report, ReportStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn MyIssuesPage() -> impl IntoView {
    let api = use_api();
    let reports = RwSignal::new(LoadState::<Vec<Report>>::Loading);
    let (tab, set_tab) = signal(Option::<ReportStatus>::None);

    let load = move || {
        reports.set(LoadState::Loading);
        let gateway = api.gateway();
        spawn_local(async move {
            let result = gateway.my_reports().await;
            reports.set(LoadState::from_result(result));
        });
    };
    load();

    let tabs = std::iter::once(None).chain(ReportStatus::ALL.into_iter().map(Some));

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"My Issues"</h1>
                <Link to=AppRoute::Report class="btn btn-primary">"Report New Issue"</Link>
            </div>
            <div role="tablist" class="tabs tabs-boxed">
                {tabs
                    .map(|status| {
                        let label = status.map(|s| s.label()).unwrap_or("All");
                        view! {
                            <a
                                role="tab"
                                class=move || if tab.get() == status { "tab tab-active" } else { "tab" }
                                on:click=move |_| set_tab.set(status)
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            {move || match reports.get() {
                LoadState::Loading => view! { <Spinner /> }.into_any(),
                LoadState::Failed(message) => {
                    view! { <ErrorPanel message=message on_retry=move |_| load() /> }.into_any()
                }
                LoadState::Ready(list) => {
                    let visible: Vec<Report> = ReportFilter::by_status(tab.get())
                        .apply(&list)
                        .into_iter()
                        .cloned()
                        .collect();
                    if visible.is_empty() {
                        view! { <EmptyPanel message="No issues to show here yet." /> }.into_any()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 gap-4">
                                {visible
                                    .into_iter()
                                    .map(|report| view! { <ReportCard report=report show_progress=true /> })
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
