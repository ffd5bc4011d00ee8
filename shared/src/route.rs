//! 路由定义模块 - 领域模型
//!
//! 纯数据层，不依赖 DOM。定义应用的所有路由及其访问要求，
//! 守卫逻辑与浏览器路由服务都建立在这张表之上。

use crate::Role;
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    #[default]
    Home,
    /// 登录 / 注册
    Login,
    Profile,
    /// 上报向导
    Report,
    Map,
    MyIssues,
    /// 管理面板 (仅管理员)
    Admin,
    Analytics,
    NotFound,
}

/// 路由访问要求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRequirement {
    Public,
    /// 仅限未登录用户；已登录用户会被送往个人资料页
    GuestOnly,
    Authenticated,
    Role(Role),
}

impl AppRoute {
    pub const ALL: [AppRoute; 9] = [
        AppRoute::Home,
        AppRoute::Login,
        AppRoute::Profile,
        AppRoute::Report,
        AppRoute::Map,
        AppRoute::MyIssues,
        AppRoute::Admin,
        AppRoute::Analytics,
        AppRoute::NotFound,
    ];

    /// 将 URL path 解析为路由枚举，忽略查询串与末尾斜杠
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Home,
            "/login" => Self::Login,
            "/profile" => Self::Profile,
            "/report" => Self::Report,
            "/map" => Self::Map,
            "/my-issues" => Self::MyIssues,
            "/admin" => Self::Admin,
            "/analytics" => Self::Analytics,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Profile => "/profile",
            Self::Report => "/report",
            Self::Map => "/map",
            Self::MyIssues => "/my-issues",
            Self::Admin => "/admin",
            Self::Analytics => "/analytics",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫表：每个路由的访问要求**
    pub fn requirement(&self) -> RouteRequirement {
        match self {
            Self::Home | Self::NotFound => RouteRequirement::Public,
            Self::Login => RouteRequirement::GuestOnly,
            Self::Profile | Self::Report | Self::Map | Self::MyIssues => {
                RouteRequirement::Authenticated
            }
            Self::Admin | Self::Analytics => RouteRequirement::Role(Role::Admin),
        }
    }

    /// 导航栏文字
    pub fn nav_label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::Profile => "Profile",
            Self::Report => "Report Issue",
            Self::Map => "View Map",
            Self::MyIssues => "My Issues",
            Self::Admin => "Dashboard",
            Self::Analytics => "Analytics",
            Self::NotFound => "Not Found",
        }
    }

    /// 未认证时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 角色不匹配时的重定向目标
    pub fn role_failure_redirect() -> Self {
        Self::Home
    }

    /// 登录 / 注册成功后的落地页
    pub fn auth_success_redirect() -> Self {
        Self::Profile
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip_through_table() {
        for route in AppRoute::ALL {
            if route == AppRoute::NotFound {
                continue;
            }
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn test_from_path_tolerates_suffixes() {
        assert_eq!(AppRoute::from_path("/admin/"), AppRoute::Admin);
        assert_eq!(AppRoute::from_path("/map?category=Other"), AppRoute::Map);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
    }

    #[test]
    fn test_admin_pages_require_admin_role() {
        assert_eq!(
            AppRoute::Analytics.requirement(),
            RouteRequirement::Role(Role::Admin)
        );
        assert_eq!(AppRoute::Login.requirement(), RouteRequirement::GuestOnly);
        assert_eq!(AppRoute::Map.requirement(), RouteRequirement::Authenticated);
    }
}
