//! 第三步：描述与照片
//!
//! 选中的照片先缩放再放入草稿；处理期间禁用文件选择。

use crate::components::toast::use_toast;
use crate::web::CanvasPhotoProcessor;
use civicsync::photo::attach_photo;
use civicsync::wizard::ReportWizard;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

fn selected_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

#[component]
pub fn DescriptionSection(wizard: RwSignal<ReportWizard>) -> impl IntoView {
    let toast = use_toast();
    let (processing, set_processing) = signal(false);

    let on_photo = move |ev: leptos::ev::Event| {
        let Some(file) = selected_file(&ev) else {
            wizard.update(|w| w.set_photo(None));
            return;
        };
        set_processing.set(true);
        spawn_local(async move {
            match attach_photo(&CanvasPhotoProcessor, &file).await {
                Ok((attachment, notice)) => {
                    let _ = wizard.try_update(|w| w.set_photo(Some(attachment)));
                    if let Some(notice) = notice {
                        toast.push(notice);
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "photo could not be read");
                    toast.push(civicsync::Notice::error(
                        "Photo unavailable",
                        "The selected file could not be read. Please choose another image.",
                    ));
                }
            }
            let _ = set_processing.try_set(false);
        });
    };

    let photo_summary = move || {
        wizard.with(|w| {
            w.draft().photo.as_ref().map(|p| {
                let dims = p
                    .dimensions
                    .map(|(width, height)| format!(", {width}x{height}"))
                    .unwrap_or_default();
                format!("{} ({}{})", p.file_name, p.size_label(), dims)
            })
        })
    };

    view! {
        <div class="form-control">
            <label for="description" class="label">
                <span class="label-text">"Description"</span>
            </label>
            <textarea id="description"
                rows="5"
                placeholder="Describe the issue in detail"
                class="textarea textarea-bordered w-full"
                prop:value=move || wizard.with(|w| w.draft().description.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| w.draft_mut().description = value);
                }
            ></textarea>
        </div>

        <div class="form-control">
            <label for="photo" class="label">
                <span class="label-text">"Photo (optional)"</span>
            </label>
            <input id="photo"
                type="file"
                accept="image/*"
                class="file-input file-input-bordered w-full"
                disabled=move || processing.get()
                on:change=on_photo
            />
            <Show when=move || processing.get()>
                <span class="text-sm text-base-content/60 mt-2">"Optimizing photo..."</span>
            </Show>
            {move || {
                photo_summary()
                    .map(|summary| {
                        view! {
                            <div class="flex items-center justify-between mt-2">
                                <span class="text-sm">{summary}</span>
                                <button
                                    type="button"
                                    class="btn btn-ghost btn-xs"
                                    on:click=move |_| wizard.update(|w| w.set_photo(None))
                                >
                                    "Remove"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
