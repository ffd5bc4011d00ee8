use crate::{
    Ack, AuthResponse, DataEnvelope, LoginRequest, RegisterRequest, Report, ReportStats,
    ReportStatus, UserProfile,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for a JSON endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// Path relative to the API base URL.
    fn path(&self) -> String;

    /// GET requests never carry a body.
    fn has_body(&self) -> bool {
        !matches!(Self::METHOD, HttpMethod::Get)
    }
}

// =========================================================
// Request Definitions
// =========================================================

impl ApiRequest for LoginRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/login".to_string()
    }
}

impl ApiRequest for RegisterRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/register".to_string()
    }
}

/// Validate the current credential and fetch its profile
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CurrentUserRequest;

impl ApiRequest for CurrentUserRequest {
    type Response = DataEnvelope<UserProfile>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/auth/me".to_string()
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ReportStatsRequest;

impl ApiRequest for ReportStatsRequest {
    type Response = DataEnvelope<ReportStats>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/reports/stats".to_string()
    }
}

/// All reports (admin listing, analytics, map)
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListReportsRequest;

impl ApiRequest for ListReportsRequest {
    type Response = DataEnvelope<Vec<Report>>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/reports".to_string()
    }
}

/// Reports filed by the current user
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MyReportsRequest;

impl ApiRequest for MyReportsRequest {
    type Response = DataEnvelope<Vec<Report>>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/reports/my-reports".to_string()
    }
}

/// Change the status of one report.
/// The id travels in the path, only `status` goes into the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReportStatusRequest {
    #[serde(skip)]
    pub id: String,
    pub status: ReportStatus,
}

impl ApiRequest for UpdateReportStatusRequest {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/reports/{}", self.id)
    }
}

/// Report submission is multipart and does not go through [`ApiRequest`].
pub const SUBMIT_REPORT_PATH: &str = "/reports";
pub const SUBMIT_REPORT_METHOD: HttpMethod = HttpMethod::Post;
pub type SubmitReportResponse = DataEnvelope<Report>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_status_keeps_id_out_of_body() {
        let req = UpdateReportStatusRequest {
            id: "abc".to_string(),
            status: ReportStatus::Resolved,
        };
        assert_eq!(req.path(), "/reports/abc");
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"status":"resolved"}"#
        );
        assert!(req.has_body());
    }

    #[test]
    fn test_get_endpoints_have_no_body() {
        assert!(!CurrentUserRequest.has_body());
        assert!(!MyReportsRequest.has_body());
        assert_eq!(MyReportsRequest.path(), "/reports/my-reports");
    }

    #[test]
    fn test_current_user_envelope_decodes() {
        let body = r#"{"data":{"_id":"u1","email":"a@x.com","role":"user"}}"#;
        let env: <CurrentUserRequest as ApiRequest>::Response = serde_json::from_str(body).unwrap();
        assert_eq!(env.data.email, "a@x.com");
    }
}
