use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

/// Uniform envelope wrapping every gateway response.
///
/// `message` is the reason phrase of `code`; `detail` says what happened in
/// words a person can read. `data` is left out of the JSON when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseFormat<T> {
    pub code: u16,
    pub message: String,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ResponseFormat<T> {
    pub fn new(status: StatusCode, detail: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code: status.as_u16(),
            message: status.canonical_reason().unwrap_or_default().to_string(),
            detail: detail.into(),
            data,
        }
    }

    /// 200 envelope carrying `data`
    pub fn ok(detail: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::OK, detail, Some(data))
    }
}

impl ResponseFormat<()> {
    /// 200 envelope for operations that only change state
    pub fn ok_empty(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, detail, None)
    }

    pub fn error(status: StatusCode, detail: impl Into<String>) -> Self {
        Self::new(status, detail, None)
    }
}

impl<T: Serialize> ResponseFormat<T> {
    pub fn into_response(self) -> HttpResponse {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(self)
    }
}
