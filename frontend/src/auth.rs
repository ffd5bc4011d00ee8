//! 认证模块
//!
//! 把核心层的 [`AuthResolver`] 接入 Leptos：阶段保存在信号中，
//! 每次操作时用浏览器存储重建解析器，执行后写回信号。
//! 路由服务通过注入的状态信号读取认证结果。

use crate::api::ApiContext;
use crate::web::BrowserStorage;
use civicsync::{AuthPhase, AuthResolver, AuthState, SessionStore, StorageError};
use civicsync_shared::{AuthResponse, UserProfile};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 认证上下文，应用启动时创建，生命周期与应用相同
#[derive(Clone, Copy)]
pub struct AuthContext {
    phase: RwSignal<AuthPhase>,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            phase: RwSignal::new(AuthPhase::Initializing),
        }
    }

    fn resolver(&self) -> AuthResolver<BrowserStorage> {
        AuthResolver::resume(
            SessionStore::new(BrowserStorage),
            self.phase.get_untracked(),
        )
    }

    /// 派生状态信号（注入路由服务）
    pub fn state(&self) -> Signal<AuthState> {
        let phase = self.phase;
        Signal::derive(move || phase.with(AuthPhase::snapshot))
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.phase.with(|p| p.user().cloned())
    }

    /// 登录 / 注册成功后写入凭据并进入已认证状态
    pub fn login(&self, auth: AuthResponse) -> Result<(), StorageError> {
        let mut resolver = self.resolver();
        let result = resolver.login(&auth.token, auth.user);
        self.phase.set(resolver.into_phase());
        result
    }

    /// 纯本地登出；页面跳转交给路由守卫
    pub fn logout(&self) {
        let mut resolver = self.resolver();
        resolver.logout();
        self.phase.set(resolver.into_phase());
    }
}

/// 创建认证上下文并启动一次性的凭据校验
pub fn provide_auth(api: ApiContext) -> AuthContext {
    let ctx = AuthContext::new();
    provide_context(ctx);

    spawn_local(async move {
        let mut resolver = AuthResolver::new(SessionStore::new(BrowserStorage));
        resolver.resolve_startup(&api.gateway()).await;
        ctx.phase.set(resolver.into_phase());
    });

    ctx
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found in context. use_auth() must be called inside <App/>.")
}
