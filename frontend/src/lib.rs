//! CivicSync 前端应用
//!
//! 采用 Context-Driven 架构：
//! - `api`: 网关上下文（配置 + 按需构造的网关）
//! - `auth`: 认证阶段信号，启动时校验一次存储的凭据
//! - `web::router`: 路由服务，守卫结果来自核心层的 `guard`
//! - `components`: 页面与 UI 组件

mod api;
mod auth;
mod components {
    pub mod admin_dashboard;
    pub mod analytics;
    pub mod common;
    pub mod home;
    pub mod layout;
    pub mod login;
    pub mod map_view;
    pub mod my_issues;
    pub mod profile;
    pub mod report_wizard;
    pub mod toast;
}

use crate::api::{ApiContext, build_config};
use crate::auth::provide_auth;
use crate::components::admin_dashboard::AdminDashboardPage;
use crate::components::analytics::AnalyticsPage;
use crate::components::home::HomePage;
use crate::components::layout::Layout;
use crate::components::login::LoginPage;
use crate::components::map_view::MapViewPage;
use crate::components::my_issues::MyIssuesPage;
use crate::components::profile::ProfilePage;
use crate::components::report_wizard::ReportWizardPage;
use crate::components::toast::{ToastHost, provide_toasts};

use civicsync::Environment;
use civicsync_shared::route::AppRoute;
use leptos::prelude::*;
use tracing_subscriber::filter::LevelFilter;

// 浏览器能力的适配层：核心 crate 中各 trait 的 web 实现
pub(crate) mod web {
    mod console;
    mod geolocation;
    mod http;
    mod photo;
    pub mod router;
    mod storage;

    pub use console::init_tracing;
    pub use geolocation::current_position;
    pub use http::GlooHttpClient;
    pub use photo::CanvasPhotoProcessor;
    pub use storage::BrowserStorage;
}

use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
///
/// 守卫已经放行后才会调用，这里只负责 route -> 页面。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::Report => view! { <ReportWizardPage /> }.into_any(),
        AppRoute::Map => view! { <MapViewPage /> }.into_any(),
        AppRoute::MyIssues => view! { <MyIssuesPage /> }.into_any(),
        AppRoute::Admin => view! { <AdminDashboardPage /> }.into_any(),
        AppRoute::Analytics => view! { <AnalyticsPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="text-center space-y-4">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl">"Page not found"</p>
                    <Link to=AppRoute::Home class="btn btn-primary">"Back to Home"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 配置与日志
    let config = build_config();
    init_logging(config.environment);
    tracing::info!(environment = ?config.environment, api = %config.api_base_url, "starting CivicSync");

    // 2. 全局上下文
    let api = ApiContext::new(config);
    provide_context(api);
    provide_toasts();

    // 3. 认证上下文，启动时校验已存储的凭据
    let auth = provide_auth(api);

    view! {
        // 4. 路由器注入认证状态实现守卫
        <Router auth=auth.state()>
            <Layout>
                <RouterOutlet matcher=route_matcher />
            </Layout>
        </Router>
        <ToastHost />
    }
}

fn init_logging(environment: Environment) {
    let level = match environment {
        Environment::Development => LevelFilter::DEBUG,
        Environment::Production => LevelFilter::INFO,
    };
    web::init_tracing(level);
}
