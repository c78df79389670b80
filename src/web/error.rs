use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::error::ActivityError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned to API callers as `{"detail": ...}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

impl From<ActivityError> for ApiError {
    fn from(err: ActivityError) -> Self {
        match err {
            ActivityError::ActivityNotFound | ActivityError::NotRegistered => {
                Self::not_found(err.to_string())
            }
            // Duplicate signups answer 400, not 409.
            ActivityError::AlreadySignedUp => Self::bad_request(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_errors_map_to_status() {
        assert_eq!(
            ApiError::from(ActivityError::ActivityNotFound).status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ActivityError::NotRegistered).status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ActivityError::AlreadySignedUp).status,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn body_is_detail_object() {
        let response = ApiError::not_found("Activity not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "detail": "Activity not found" }));
    }
}
