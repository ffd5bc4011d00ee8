//! 第一步：标题、分类与严重程度

use civicsync::wizard::{ReportWizard, Severity};
use civicsync_shared::REPORT_CATEGORIES;
use leptos::prelude::*;

#[component]
pub fn DetailsForm(wizard: RwSignal<ReportWizard>) -> impl IntoView {
    let severity = Memo::new(move |_| wizard.with(|w| w.draft().severity));

    view! {
        <div class="form-control">
            <label for="title" class="label">
                <span class="label-text">"Issue title"</span>
            </label>
            <input id="title"
                type="text"
                placeholder="Pothole on Main Street"
                class="input input-bordered w-full"
                prop:value=move || wizard.with(|w| w.draft().title.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| w.draft_mut().title = value);
                }
            />
        </div>

        <div class="form-control">
            <label for="category" class="label">
                <span class="label-text">"Category"</span>
            </label>
            <select id="category"
                class="select select-bordered w-full"
                prop:value=move || wizard.with(|w| w.draft().category.clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| w.draft_mut().category = value);
                }
            >
                <option value="" disabled>"Select a category"</option>
                {REPORT_CATEGORIES
                    .into_iter()
                    .map(|c| view! { <option value=c>{c}</option> })
                    .collect_view()}
            </select>
        </div>

        <div class="form-control">
            <label for="severity" class="label">
                <span class="label-text">"Severity"</span>
                <span class="label-text-alt">
                    {move || format!("{} ({})", severity.get().value(), severity.get().label())}
                </span>
            </label>
            <input id="severity"
                type="range"
                min=Severity::MIN.to_string()
                max=Severity::MAX.to_string()
                step="1"
                class="range range-primary"
                prop:value=move || severity.get().value().to_string()
                on:input=move |ev| {
                    let value = event_target_value(&ev).parse().unwrap_or_default();
                    wizard.update(|w| w.draft_mut().severity = Severity::new(value));
                }
            />
        </div>
    }
}
