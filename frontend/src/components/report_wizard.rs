//! 上报向导
//!
//! 状态全部放在核心的 [`ReportWizard`] 里，组件只负责渲染和转发事件。
//! 前进不做校验，缺失项在各步骤内提示，最终由确认步骤的提交统一拦截。

mod description_section;
mod details_form;
mod location_section;
mod review_section;

use crate::api::use_api;
use crate::components::toast::use_toast;
use civicsync::wizard::{DraftField, ReportWizard, WizardStep, submitted_notice};
use leptos::prelude::*;
use leptos::task::spawn_local;

use description_section::DescriptionSection;
use details_form::DetailsForm;
use location_section::LocationSection;
use review_section::ReviewSection;

/// 当前步骤尚未填写的必填项
#[component]
fn StepWarnings(wizard: RwSignal<ReportWizard>, step: WizardStep) -> impl IntoView {
    let missing = Memo::new(move |_| wizard.with(|w| w.step_warnings(step)));

    move || {
        let fields = missing.get();
        (!fields.is_empty()).then(|| {
            view! {
                <div role="alert" class="alert alert-warning text-sm py-2">
                    <span>{format!("Still needed: {}", DraftField::join_labels(&fields))}</span>
                </div>
            }
        })
    }
}

#[component]
pub fn ReportWizardPage() -> impl IntoView {
    let api = use_api();
    let toast = use_toast();
    let wizard = RwSignal::new(ReportWizard::new());

    let step = Memo::new(move |_| wizard.with(|w| w.step()));
    let submitting = Memo::new(move |_| wizard.with(|w| w.is_submitting()));

    let on_submit = move |_| {
        let form = match wizard.try_update(|w| w.begin_submission()) {
            Some(Ok(form)) => form,
            Some(Err(err)) => {
                toast.push(err.notice());
                return;
            }
            None => return,
        };
        let gateway = api.gateway();
        spawn_local(async move {
            let result = gateway.submit_report(form).await;
            // 页面可能已离开，信号被释放时结果直接丢弃
            let Some(outcome) = wizard.try_update(|w| w.finish_submission(result)) else {
                return;
            };
            match outcome {
                Ok(report) => toast.push(submitted_notice(&report)),
                Err(err) => toast.push(err.notice()),
            }
        });
    };

    let step_body = move || match step.get().number() {
        1 => view! { <DetailsForm wizard=wizard /> }.into_any(),
        2 => view! { <LocationSection wizard=wizard /> }.into_any(),
        3 => view! { <DescriptionSection wizard=wizard /> }.into_any(),
        _ => view! { <ReviewSection wizard=wizard /> }.into_any(),
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold">"Report an Issue"</h1>

            <ul class="steps w-full">
                {WizardStep::ALL
                    .into_iter()
                    .map(|s| {
                        view! {
                            <li class=move || {
                                if s <= step.get() { "step step-primary" } else { "step" }
                            }>{s.title()}</li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body space-y-4">
                    <h2 class="card-title">
                        {move || format!("Step {}: {}", step.get().number(), step.get().title())}
                    </h2>
                    {move || {
                        let current = step.get();
                        view! { <StepWarnings wizard=wizard step=current /> }
                    }}
                    {step_body}

                    <div class="card-actions justify-between pt-4">
                        <button
                            type="button"
                            class="btn btn-ghost"
                            disabled=move || step.get().is_first() || submitting.get()
                            on:click=move |_| wizard.update(|w| w.previous())
                        >
                            "Back"
                        </button>
                        <Show
                            when=move || step.get().is_review()
                            fallback=move || view! {
                                <button
                                    type="button"
                                    class="btn btn-primary"
                                    on:click=move |_| wizard.update(|w| w.next())
                                >
                                    "Next"
                                </button>
                            }
                        >
                            <button
                                type="button"
                                class="btn btn-primary"
                                disabled=move || submitting.get()
                                on:click=on_submit
                            >
                                <Show when=move || submitting.get()>
                                    <span class="loading loading-spinner"></span>
                                </Show>
                                {move || if submitting.get() { "Submitting..." } else { "Submit Report" }}
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
