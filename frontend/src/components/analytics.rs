//! 统计页
//!
//! 基于全部报告在本地聚合，不依赖后端的统计接口。

use crate::api::use_api;
use crate::components::common::{EmptyPanel, ErrorPanel, LoadState, Spinner, status_badge_class};
use civicsync::analytics::{ReportSummary, summarize};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn share(count: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        ((count as f64 / total as f64) * 100.0).round() as u32
    }
}

#[component]
fn SummaryView(summary: ReportSummary) -> impl IntoView {
    let total = summary.total;
    let stats = summary.as_stats();

    view! {
        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
            <div class="stat">
                <div class="stat-title">"Total Reports"</div>
                <div class="stat-value">{stats.total}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Resolution Rate"</div>
                <div class="stat-value text-success">{format!("{}%", summary.resolution_percent())}</div>
                <div class="stat-desc">{format!("{} of {} resolved", stats.resolved, stats.total)}</div>
            </div>
        </div>

        <div class="grid md:grid-cols-2 gap-6">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"By Status"</h3>
                    {summary
                        .by_status
                        .iter()
                        .map(|(status, count)| {
                            view! {
                                <div class="space-y-1">
                                    <div class="flex justify-between text-sm">
                                        <span class=status_badge_class(*status)>{status.label()}</span>
                                        <span>{*count}</span>
                                    </div>
                                    <progress
                                        class="progress w-full"
                                        value=share(*count, total).to_string()
                                        max="100"
                                    ></progress>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"By Category"</h3>
                    {summary
                        .by_category
                        .iter()
                        .map(|(category, count)| {
                            view! {
                                <div class="space-y-1">
                                    <div class="flex justify-between text-sm">
                                        <span>{category.clone()}</span>
                                        <span>{format!("{} ({}%)", count, share(*count, total))}</span>
                                    </div>
                                    <progress
                                        class="progress progress-primary w-full"
                                        value=share(*count, total).to_string()
                                        max="100"
                                    ></progress>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let api = use_api();
    let summary = RwSignal::new(LoadState::<ReportSummary>::Loading);

    let load = move || {
        summary.set(LoadState::Loading);
        let gateway = api.gateway();
        spawn_local(async move {
            let result = gateway.all_reports().await.map(|list| summarize(&list));
            summary.set(LoadState::from_result(result));
        });
    };
    load();

    view! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold">"Analytics"</h1>
            {move || match summary.get() {
                LoadState::Loading => view! { <Spinner /> }.into_any(),
                LoadState::Failed(message) => {
                    view! { <ErrorPanel message=message on_retry=move |_| load() /> }.into_any()
                }
                LoadState::Ready(s) if s.total == 0 => {
                    view! { <EmptyPanel message="No reports to analyze yet." /> }.into_any()
                }
                LoadState::Ready(s) => view! { <SummaryView summary=s /> }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::share;

    #[test]
    fn share_rounds_and_handles_empty() {
        assert_eq!(share(0, 0), 0);
        assert_eq!(share(1, 3), 33);
        assert_eq!(share(2, 3), 67);
        assert_eq!(share(4, 4), 100);
    }
}
