use crate::auth::use_auth;
use crate::web::router::Link;
use civicsync_shared::Role;
use civicsync_shared::route::AppRoute;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    // 主按钮随角色变化
    let primary_action = move || match auth.user().map(|u| u.role) {
        None => (AppRoute::Login, "Get Started"),
        Some(Role::Citizen) => (AppRoute::Report, "Report an Issue"),
        Some(Role::Admin) => (AppRoute::Admin, "Open Dashboard"),
    };

    view! {
        <div class="hero min-h-[60vh] bg-base-100 rounded-box shadow-xl">
            <div class="hero-content text-center">
                <div class="max-w-xl space-y-6">
                    <h1 class="text-5xl font-bold">"CivicSync"</h1>
                    <p class="text-lg text-base-content/70">
                        "Spot a pothole, a broken streetlight or overflowing bins? "
                        "Report it in under a minute and follow it until it is fixed."
                    </p>
                    {move || {
                        let (route, label) = primary_action();
                        view! { <Link to=route class="btn btn-primary btn-lg">{label}</Link> }
                    }}
                </div>
            </div>
        </div>
        <div class="grid md:grid-cols-3 gap-4 mt-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">"1. Report"</h3>
                    <p>"Describe the problem, add a photo and pin the location."</p>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">"2. Track"</h3>
                    <p>"Watch your report move from pending to resolved."</p>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">"3. Resolve"</h3>
                    <p>"City staff prioritise and fix issues across the map."</p>
                </div>
            </div>
        </div>
    }
}
