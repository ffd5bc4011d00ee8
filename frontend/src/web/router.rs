//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程："监听 -> 守卫 -> 处理 -> 加载"；守卫决策来自核心层的 `guard`，
//! 这里只负责执行跳转与渲染。

use civicsync::AuthState;
use civicsync::guard::{RouteAccess, authorize_route};
use civicsync_shared::route::AppRoute;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// 重定向时替换历史记录，后退不会回到被拒绝的页面
fn replace_history_state(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// 路由器服务
///
/// 认证状态以信号形式注入，与认证模块解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    auth: Signal<AuthState>,
}

impl RouterService {
    fn new(auth: Signal<AuthState>) -> Self {
        let (current_route, set_route) = signal(AppRoute::from_path(&current_path()));
        Self {
            current_route,
            set_route,
            auth,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 当前路由的守卫结果；只有路由或决策变化时才通知订阅者
    pub fn access(&self) -> Memo<(AppRoute, RouteAccess)> {
        let current_route = self.current_route;
        let auth = self.auth;
        Memo::new(move |_| {
            let route = current_route.get();
            let access = auth.with(|state| authorize_route(route, state));
            (route, access)
        })
    }

    pub fn navigate(&self, route: AppRoute) {
        if route == self.current_route.get_untracked() {
            return;
        }
        tracing::debug!(to = %route, "navigate");
        push_history_state(route.to_path());
        self.set_route.set(route);
    }

    fn redirect(&self, to: AppRoute, replace: bool) {
        tracing::debug!(to = %to, replace, "redirect");
        if replace {
            replace_history_state(to.to_path());
        } else {
            push_history_state(to.to_path());
        }
        self.set_route.set(to);
    }

    /// 浏览器后退/前进按钮；守卫在出口处统一执行
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let closure = Closure::<dyn Fn()>::new(move || {
            set_route.set(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

fn provide_router(auth: Signal<AuthState>) -> RouterService {
    let router = RouterService::new(auth);
    router.init_popstate_listener();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，提供路由上下文
#[component]
pub fn Router(auth: Signal<AuthState>, children: Children) -> impl IntoView {
    provide_router(auth);
    children()
}

/// 路由出口组件
///
/// 加载中渲染占位；守卫要求重定向时由 Effect 执行跳转，期间不渲染任何页面。
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();
    let access = router.access();

    Effect::new(move |_| {
        if let (_, RouteAccess::Redirect { to, replace }) = access.get() {
            router.redirect(to, replace);
        }
    });

    move || match access.get() {
        (_, RouteAccess::Loading) => view! {
            <div class="flex items-center justify-center min-h-[50vh]">
                <span class="loading loading-spinner loading-lg"></span>
            </div>
        }
        .into_any(),
        (_, RouteAccess::Redirect { .. }) => ().into_any(),
        (route, RouteAccess::Render) => matcher(route),
    }
}

/// 站内链接，拦截点击改走路由服务
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
