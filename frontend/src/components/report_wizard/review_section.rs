//! 第四步：确认

use civicsync::geo::format_coordinates;
use civicsync::wizard::{ReportDraft, ReportWizard};
use leptos::prelude::*;

fn or_dash(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "-".to_string()
    } else {
        trimmed.to_string()
    }
}

fn rows(draft: &ReportDraft) -> Vec<(&'static str, String)> {
    vec![
        ("Title", or_dash(&draft.title)),
        ("Category", or_dash(&draft.category)),
        (
            "Severity",
            format!("{} ({})", draft.severity.value(), draft.severity.label()),
        ),
        ("Address", or_dash(&draft.address)),
        (
            "Coordinates",
            draft
                .coordinates
                .as_ref()
                .map(format_coordinates)
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Description", or_dash(&draft.description)),
        (
            "Photo",
            draft
                .photo
                .as_ref()
                .map(|p| format!("{} ({})", p.file_name, p.size_label()))
                .unwrap_or_else(|| "None".to_string()),
        ),
    ]
}

#[component]
pub fn ReviewSection(wizard: RwSignal<ReportWizard>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="table">
                <tbody>
                    {move || {
                        wizard
                            .with(|w| rows(w.draft()))
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <tr>
                                        <th class="w-1/3 text-base-content/60">{label}</th>
                                        <td class="whitespace-pre-wrap">{value}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
