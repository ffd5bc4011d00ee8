//! 第二步：地址与定位
//!
//! 定位成功时用坐标覆盖地址；失败时地址保持原样，只弹出提示。

use crate::components::toast::use_toast;
use crate::web::current_position;
use civicsync::geo::format_coordinates;
use civicsync::wizard::ReportWizard;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LocationSection(wizard: RwSignal<ReportWizard>) -> impl IntoView {
    let toast = use_toast();
    let (locating, set_locating) = signal(false);

    let on_locate = move |_| {
        set_locating.set(true);
        spawn_local(async move {
            let outcome = current_position().await;
            if let Some(notice) = wizard.try_update(|w| w.apply_geolocation(outcome)) {
                toast.push(notice);
            }
            let _ = set_locating.try_set(false);
        });
    };

    let coordinates = move || wizard.with(|w| w.draft().coordinates);

    view! {
        <div class="form-control">
            <label for="address" class="label">
                <span class="label-text">"Address"</span>
            </label>
            <input id="address"
                type="text"
                placeholder="Street, landmark or area"
                class="input input-bordered w-full"
                prop:value=move || wizard.with(|w| w.draft().address.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| w.draft_mut().address = value);
                }
            />
        </div>

        <button
            type="button"
            class="btn btn-outline w-full"
            disabled=move || locating.get()
            on:click=on_locate
        >
            <Show when=move || locating.get()>
                <span class="loading loading-spinner"></span>
            </Show>
            {move || if locating.get() { "Locating..." } else { "Use My Current Location" }}
        </button>

        {move || {
            coordinates()
                .map(|c| {
                    view! {
                        <p class="text-sm text-base-content/60">
                            {format!("Coordinates: {}", format_coordinates(&c))}
                        </p>
                    }
                })
        }}
    }
}
