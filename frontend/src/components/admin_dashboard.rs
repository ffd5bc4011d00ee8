use crate::api::use_api;
use crate::components::common::{EmptyPanel, ErrorPanel, LoadState, Spinner, StatusBadge};
use crate::components::toast::use_toast;
use civicsync::Notice;
use civicsync::analytics::load_dashboard;
use civicsync_shared::{Report, ReportStats, ReportStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = use_api();
    let toast = use_toast();

    let stats = RwSignal::new(LoadState::<ReportStats>::Loading);
    let reports = RwSignal::new(LoadState::<Vec<Report>>::Loading);
    // 正在更新状态的报告 id
    let (updating, set_updating) = signal(Option::<String>::None);

    let load = move || {
        stats.set(LoadState::Loading);
        reports.set(LoadState::Loading);
        let gateway = api.gateway();
        spawn_local(async move {
            let data = load_dashboard(&gateway).await;
            stats.set(LoadState::from_result(data.stats));
            reports.set(LoadState::from_result(data.reports));
        });
    };
    load();

    let change_status = move |id: String, status: ReportStatus| {
        set_updating.set(Some(id.clone()));
        let gateway = api.gateway();
        spawn_local(async move {
            match gateway.update_report_status(&id, status).await {
                Ok(_) => {
                    reports.update(|state| {
                        if let LoadState::Ready(list) = state {
                            if let Some(report) = list.iter_mut().find(|r| r.id == id) {
                                report.status = status;
                            }
                        }
                    });
                    if let Ok(fresh) = gateway.report_stats().await {
                        stats.set(LoadState::Ready(fresh));
                    }
                    toast.push(Notice::success(
                        "Status updated",
                        format!("Report marked as {}.", status.label()),
                    ));
                }
                Err(err) => toast.push(err.notice("Update failed")),
            }
            set_updating.set(None);
        });
    };

    let stat_cards = move || match stats.get() {
        LoadState::Loading => view! { <Spinner /> }.into_any(),
        LoadState::Failed(message) => {
            view! { <ErrorPanel message=message on_retry=move |_| load() /> }.into_any()
        }
        LoadState::Ready(s) => view! {
            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Total Reports"</div>
                    <div class="stat-value text-primary">{s.total}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Pending"</div>
                    <div class="stat-value text-warning">{s.pending}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"In Progress"</div>
                    <div class="stat-value text-info">{s.in_progress}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Resolved"</div>
                    <div class="stat-value text-success">{s.resolved}</div>
                </div>
            </div>
        }
        .into_any(),
    };

    let table = move || match reports.get() {
        LoadState::Loading => view! { <Spinner /> }.into_any(),
        LoadState::Failed(message) => {
            view! { <ErrorPanel message=message on_retry=move |_| load() /> }.into_any()
        }
        LoadState::Ready(list) if list.is_empty() => {
            view! { <EmptyPanel message="No reports have been submitted yet." /> }.into_any()
        }
        LoadState::Ready(list) => view! {
            <div class="overflow-x-auto w-full">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Category"</th>
                            <th class="hidden md:table-cell">"Location"</th>
                            <th class="hidden md:table-cell">"Reporter"</th>
                            <th class="hidden lg:table-cell">"Priority"</th>
                            <th>"Date"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {list
                            .into_iter()
                            .map(|report| {
                                let id = report.id.clone();
                                let row_id = report.id.clone();
                                let busy = move || updating.get().as_deref() == Some(row_id.as_str());
                                let on_change = move |ev: leptos::ev::Event| {
                                    if let Some(status) = ReportStatus::parse(&event_target_value(&ev)) {
                                        change_status(id.clone(), status);
                                    }
                                };
                                view! {
                                    <tr>
                                        <td class="font-medium">{report.display_title().to_string()}</td>
                                        <td>{report.display_category().to_string()}</td>
                                        <td class="hidden md:table-cell">{report.display_address().to_string()}</td>
                                        <td class="hidden md:table-cell">{report.reporter_email().to_string()}</td>
                                        <td class="hidden lg:table-cell">
                                            {report.priority.map(|p| p.label()).unwrap_or("-")}
                                        </td>
                                        <td>{report.display_date()}</td>
                                        <td><StatusBadge status=report.status /></td>
                                        <td>
                                            <select
                                                class="select select-bordered select-sm"
                                                disabled=busy
                                                on:change=on_change
                                            >
                                                {ReportStatus::ALL
                                                    .into_iter()
                                                    .map(|s| view! {
                                                        <option value=s.as_str() selected={s == report.status}>
                                                            {s.label()}
                                                        </option>
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Admin Dashboard"</h1>
                <button class="btn btn-ghost" on:click=move |_| load()>"Refresh"</button>
            </div>
            {stat_cards}
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <h3 class="card-title p-6 pb-2">"All Reports"</h3>
                    {table}
                </div>
            </div>
        </div>
    }
}
