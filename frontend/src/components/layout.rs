use crate::auth::use_auth;
use crate::web::router::{Link, use_router};
use civicsync::guard::nav_items;
use civicsync_shared::route::AppRoute;
use leptos::prelude::*;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let state = auth.state();

    let items = Memo::new(move |_| state.with(nav_items));
    let current = router.current_route();

    let on_logout = move |_| {
        auth.logout();
    };

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <div class="navbar bg-base-100 shadow-md px-4">
                <div class="flex-1">
                    <Link to=AppRoute::Home class="btn btn-ghost text-xl text-primary">
                        "CivicSync"
                    </Link>
                </div>
                <div class="flex-none gap-2">
                    <ul class="menu menu-horizontal px-1 hidden md:flex">
                        <For
                            each=move || items.get()
                            key=|route| *route
                            children=move |route| {
                                let class = move || {
                                    if current.get() == route { "active font-semibold" } else { "" }
                                };
                                view! {
                                    <li class=class>
                                        <Link to=route>{route.nav_label()}</Link>
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <Show when=move || state.with(|s| s.is_authenticated())>
                        <span class="badge badge-neutral hidden lg:inline-flex">
                            {move || auth.user().map(|u| u.email).unwrap_or_default()}
                        </span>
                        <button on:click=on_logout class="btn btn-outline btn-error btn-sm">
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
            <main class="max-w-7xl mx-auto p-4 md:p-8">{children()}</main>
        </div>
    }
}
