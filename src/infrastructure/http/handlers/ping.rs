//! Health Handlers

use axum::{extract::OriginalUri, http::Method, Json};

use crate::infrastructure::http::dto::{HealthResponse, PingResponse};
use crate::infrastructure::http::error::ApiError;

/// Ping endpoint - 状态和版本
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// 存活检查
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// 未匹配的路由
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(format!("Not Found: {} {}", method, uri))
}
