use crate::auth::use_auth;
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();

    move || {
        auth.user().map(|user| {
            let initial = user
                .email
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('?');
            view! {
                <div class="card bg-base-100 shadow-xl max-w-lg mx-auto">
                    <div class="card-body items-center text-center">
                        <div class="avatar placeholder">
                            <div class="bg-primary text-primary-content rounded-full w-20">
                                <span class="text-3xl">{initial.to_string()}</span>
                            </div>
                        </div>
                        <h2 class="card-title text-2xl">{user.role.profile_title()}</h2>
                        <div class="w-full text-left space-y-2 mt-4">
                            <div class="flex justify-between">
                                <span class="text-base-content/60">"Email"</span>
                                <span>{user.email.clone()}</span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-base-content/60">"Phone"</span>
                                <span>{user.phone.clone().unwrap_or_else(|| "Not provided".to_string())}</span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-base-content/60">"Role"</span>
                                <span class="badge badge-primary">{user.role.label()}</span>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
