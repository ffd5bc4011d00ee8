//! 页面共用的小部件

use civicsync::ApiError;
use civicsync_shared::{Report, ReportStatus};
use leptos::prelude::*;

/// 数据视图的三种状态；失败态与加载态区分开，不会无限转圈
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => LoadState::Failed(err.user_message()),
        }
    }
}

pub fn status_badge_class(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Pending => "badge badge-warning",
        ReportStatus::InProgress => "badge badge-info",
        ReportStatus::Resolved => "badge badge-success",
    }
}

#[component]
pub fn StatusBadge(status: ReportStatus) -> impl IntoView {
    view! { <span class=status_badge_class(status)>{status.label()}</span> }
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex justify-center py-12">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

#[component]
pub fn ErrorPanel(message: String, #[prop(into)] on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div role="alert" class="alert alert-error">
            <span>{message}</span>
            <button class="btn btn-sm" on:click=move |_| on_retry.run(())>"Retry"</button>
        </div>
    }
}

#[component]
pub fn EmptyPanel(message: &'static str) -> impl IntoView {
    view! { <div class="text-center py-12 text-base-content/50">{message}</div> }
}

/// OpenStreetMap 链接
pub fn osm_link(report: &Report) -> Option<String> {
    report.coordinates().map(|c| {
        format!(
            "https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map=17/{lat}/{lng}",
            lat = c.latitude,
            lng = c.longitude
        )
    })
}

#[component]
pub fn ReportCard(report: Report, #[prop(optional)] show_progress: bool) -> impl IntoView {
    let progress = report.status.progress();
    let map_link = osm_link(&report);

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body gap-2">
                <div class="flex items-start justify-between gap-2">
                    <h3 class="card-title text-base">{report.display_title().to_string()}</h3>
                    <StatusBadge status=report.status />
                </div>
                <div class="flex flex-wrap gap-2 text-sm text-base-content/70">
                    <span class="badge badge-outline">{report.display_category().to_string()}</span>
                    <span>{report.display_address().to_string()}</span>
                    <span>{report.display_date()}</span>
                </div>
                <p class="text-sm">{report.description.clone()}</p>
                {show_progress.then(|| view! {
                    <progress class="progress progress-primary w-full" value=progress max="100"></progress>
                    <span class="text-xs text-base-content/60">{format!("{progress}% complete")}</span>
                })}
                {map_link.map(|href| view! {
                    <a class="link link-primary text-sm" href=href target="_blank" rel="noopener">
                        "Open in map"
                    </a>
                })}
            </div>
        </div>
    }
}
