//! CivicSync 共享模型
//!
//! 前端与客户端核心共用的领域模型与线格式：
//! - 用户与角色
//! - 市政问题报告及其状态
//! - 后端响应信封
//!
//! 后端字段命名并不统一（`_id` / `id`、`location` / `address`），
//! 这里用 serde 别名吸收差异，其余模块只看到统一的 Rust 类型。

pub mod protocol;
pub mod route;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 持久化凭据使用的固定存储键
pub const CREDENTIAL_STORAGE_KEY: &str = "token";
pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// 报告表单可选的问题类别
pub const REPORT_CATEGORIES: [&str; 7] = [
    "Roads & Infrastructure",
    "Water & Utilities",
    "Sanitation & Waste",
    "Streetlights",
    "Parks & Recreation",
    "Public Safety",
    "Other",
];

// =========================================================
// 用户与角色 (Users & Roles)
// =========================================================

/// 用户角色
///
/// 封闭枚举：后端返回未知角色时反序列化直接失败，
/// 不会被当作"无限制"的用户放行。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user", alias = "citizen")]
    Citizen,
    #[serde(rename = "admin")]
    Admin,
}

impl Role {
    /// 个人资料页标题
    pub fn profile_title(&self) -> &'static str {
        match self {
            Role::Citizen => "Citizen Profile",
            Role::Admin => "Administrator",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Citizen => "Citizen",
            Role::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

// =========================================================
// 报告 (Reports)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 3] = [
        ReportStatus::Pending,
        ReportStatus::InProgress,
        ReportStatus::Resolved,
    ];

    /// 线格式字符串，与 serde 表示一致
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::InProgress => "in-progress",
            ReportStatus::Resolved => "resolved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::InProgress => "In Progress",
            ReportStatus::Resolved => "Resolved",
        }
    }

    /// "我的问题"页面展示的处理进度（百分比）
    pub fn progress(&self) -> u8 {
        match self {
            ReportStatus::Pending => 25,
            ReportStatus::InProgress => 60,
            ReportStatus::Resolved => 100,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// 报告提交者
///
/// 列表接口会展开 `userId` 为对象，个人接口只返回 id 字符串。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReporterRef {
    Populated {
        #[serde(default)]
        email: Option<String>,
    },
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "location")]
    pub address: String,
    #[serde(default)]
    pub severity: Option<u8>,
    #[serde(default)]
    pub status: ReportStatus,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "photoUrl")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, rename = "userId")]
    pub reporter: Option<ReporterRef>,
}

impl Report {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            _ => None,
        }
    }

    pub fn display_title(&self) -> &str {
        non_empty_or(&self.title, "Untitled Report")
    }

    pub fn display_category(&self) -> &str {
        non_empty_or(&self.category, "General")
    }

    pub fn display_address(&self) -> &str {
        non_empty_or(&self.address, "Not specified")
    }

    pub fn reporter_email(&self) -> &str {
        match &self.reporter {
            Some(ReporterRef::Populated { email: Some(email) }) => email,
            _ => "Anonymous",
        }
    }

    /// 本地化之前的简单日期展示 (YYYY-MM-DD)
    pub fn display_date(&self) -> String {
        self.created_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// `GET /reports/stats` 的统计数据
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default, rename = "inProgress")]
    pub in_progress: u64,
    #[serde(default)]
    pub resolved: u64,
}

// =========================================================
// 请求与响应 (Payloads)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// 登录与注册共用的响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

/// 后端统一的 `{ data: ... }` 响应信封
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// 错误响应体，只关心可展示给用户的 message
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusBody {
    pub status: ReportStatus,
}

/// 无需解析内容的确认响应
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_accepts_backend_aliases() {
        let user: UserProfile =
            serde_json::from_str(r#"{"_id":"7","email":"a@x.com","phone":"123","role":"user"}"#)
                .unwrap();
        assert_eq!(user.id, "7");
        assert_eq!(user.role, Role::Citizen);

        let user: UserProfile =
            serde_json::from_str(r#"{"id":"1","email":"a@x.com","role":"citizen"}"#).unwrap();
        assert_eq!(user.role, Role::Citizen);
        assert_eq!(user.phone, None);

        let admin: UserProfile =
            serde_json::from_str(r#"{"id":"2","email":"b@x.com","role":"admin"}"#).unwrap();
        assert!(admin.is_admin());
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let parsed =
            serde_json::from_str::<UserProfile>(r#"{"id":"3","email":"c@x.com","role":"moderator"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_report_decodes_populated_listing() {
        let json = r#"{
            "_id": "r1",
            "title": "",
            "category": "Streetlights",
            "location": "MG Road",
            "status": "in-progress",
            "priority": "high",
            "createdAt": "2024-01-12T10:00:00Z",
            "userId": { "email": "citizen@x.com" }
        }"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.id, "r1");
        assert_eq!(report.address, "MG Road");
        assert_eq!(report.status, ReportStatus::InProgress);
        assert_eq!(report.priority, Some(Priority::High));
        assert_eq!(report.display_title(), "Untitled Report");
        assert_eq!(report.reporter_email(), "citizen@x.com");
        assert_eq!(report.display_date(), "2024-01-12");
        assert!(report.coordinates().is_none());
    }

    #[test]
    fn test_report_with_plain_user_id_is_anonymous() {
        let json = r#"{"id":"r2","status":"pending","userId":"u9","latitude":12.9,"longitude":77.6}"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.reporter, Some(ReporterRef::Id("u9".to_string())));
        assert_eq!(report.reporter_email(), "Anonymous");
        assert_eq!(report.display_category(), "General");
        assert_eq!(report.coordinates(), Some(Coordinates::new(12.9, 77.6)));
    }

    #[test]
    fn test_stats_in_progress_defaults_to_zero() {
        let stats: ReportStats =
            serde_json::from_str(r#"{"total":4,"pending":3,"resolved":1}"#).unwrap();
        assert_eq!(stats.in_progress, 0);
        assert_eq!(stats.total, 4);
    }

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(
            serde_json::to_string(&UpdateStatusBody {
                status: ReportStatus::InProgress
            })
            .unwrap(),
            r#"{"status":"in-progress"}"#
        );
        assert_eq!(ReportStatus::parse("resolved"), Some(ReportStatus::Resolved));
        assert_eq!(ReportStatus::parse("closed"), None);
    }
}
