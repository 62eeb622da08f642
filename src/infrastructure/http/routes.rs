//! HTTP Routes
//!
//! API Endpoints（同时挂载在 `/api` 和 `/` 下）:
//! - /healthz                    GET   存活检查
//! - /ping                       GET   状态和版本
//! - /files/upload               POST  上传 IDML / ZIP（multipart 字段 `file`）
//! - /files                      GET   列出已上传的文件
//! - /files/stats                GET   存储统计
//! - /files/:file_id/segments    GET   获取片段
//! - /files/:file_id/export      POST  写入译文并下载 IDML
//! - /translate                  POST  翻译单条文本
//! - /translate/batch            POST  批量翻译

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .merge(api_routes())
        .fallback(handlers::not_found)
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/ping", get(handlers::ping))
        .nest("/files", file_routes())
        .nest("/translate", translate_routes())
}

/// File 路由
fn file_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_files))
        .route("/upload", post(handlers::upload_file))
        .route("/stats", get(handlers::storage_stats))
        .route("/:file_id/segments", get(handlers::get_segments))
        .route("/:file_id/export", post(handlers::export_file))
}

/// Translate 路由
fn translate_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(handlers::translate_one))
        .route("/batch", post(handlers::translate_batch))
}
