//! HTTP Error Handling

use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: String,
    pub data: Option<()>,
}

impl ErrorResponse {
    pub fn new(errno: i32, error: impl Into<String>) -> Self {
        Self {
            errno,
            error: error.into(),
            data: None,
        }
    }
}

/// 错误码定义，与 HTTP 状态码一致
pub mod errno {
    pub const BAD_REQUEST: i32 = 400;
    pub const NOT_FOUND: i32 = 404;
    pub const PAYLOAD_TOO_LARGE: i32 = 413;
    pub const UNSUPPORTED_MEDIA_TYPE: i32 = 415;
    pub const UNPROCESSABLE: i32 = 422;
    pub const INTERNAL_ERROR: i32 = 500;
    pub const SERVICE_UNAVAILABLE: i32 = 503;
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    PayloadTooLarge(String),
    UnsupportedMediaType(String),
    Unprocessable(String),
    Internal(String),
    ServiceUnavailable(String),
}

impl ApiError {
    pub fn errno(&self) -> i32 {
        match self {
            ApiError::NotFound(_) => errno::NOT_FOUND,
            ApiError::BadRequest(_) => errno::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => errno::PAYLOAD_TOO_LARGE,
            ApiError::UnsupportedMediaType(_) => errno::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Unprocessable(_) => errno::UNPROCESSABLE,
            ApiError::Internal(_) => errno::INTERNAL_ERROR,
            ApiError::ServiceUnavailable(_) => errno::SERVICE_UNAVAILABLE,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::PayloadTooLarge(msg)
            | ApiError::UnsupportedMediaType(msg)
            | ApiError::Unprocessable(msg)
            | ApiError::Internal(msg)
            | ApiError::ServiceUnavailable(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let errno = self.errno();
        let status = u16::try_from(errno)
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(errno = errno, error = %self.message(), "Request failed");
        } else {
            tracing::warn!(errno = errno, error = %self.message(), "Request rejected");
        }

        (status, Json(ErrorResponse::new(errno, self.message()))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ApplicationError::InvalidInput(msg) => ApiError::Unprocessable(msg),
            ApplicationError::ValidationError(msg) => ApiError::Unprocessable(msg),
            ApplicationError::UnsupportedMediaType(_) => ApiError::UnsupportedMediaType(e.to_string()),
            ApplicationError::ExternalServiceError(msg) => ApiError::ServiceUnavailable(msg),
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(_) => ApiError::BadRequest("Invalid JSON payload".to_string()),
            JsonRejection::JsonDataError(e) => {
                ApiError::Unprocessable(format!("Validation error: {}", e.body_text()))
            }
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge("Payload Too Large".to_string())
        } else {
            ApiError::BadRequest(format!("Failed to read multipart field: {}", e.body_text()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_error_mapping() {
        let cases = [
            (ApplicationError::not_found("File", "x"), StatusCode::NOT_FOUND),
            (ApplicationError::InvalidInput("bad zip".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (ApplicationError::validation("No replacements"), StatusCode::UNPROCESSABLE_ENTITY),
            (
                ApplicationError::UnsupportedMediaType("a.txt".into()),
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ),
            (
                ApplicationError::ExternalServiceError("down".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (ApplicationError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            let response = ApiError::from(error).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_not_found_message() {
        let error = ApiError::from(ApplicationError::not_found("File", "abc"));
        assert_eq!(error.message(), "File not found: abc");
        assert_eq!(error.errno(), errno::NOT_FOUND);
    }
}
