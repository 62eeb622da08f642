//! File HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, Multipart, Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::{
    ExportDocument, FileMeta, GetSegments, GetStorageStats, ListFiles, RegistryStats,
    UploadDocument,
};
use crate::infrastructure::http::dto::{ApiResponse, ExportRequest, FileSegmentsDto, UploadResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 上传 IDML 或 ZIP（multipart 字段 `file`）
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadResponse>>, ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        upload = Some((file_name, bytes.to_vec()));
    }

    let (file_name, bytes) = upload.ok_or_else(|| ApiError::BadRequest("No file".to_string()))?;

    tracing::debug!(file_name = %file_name, size = bytes.len(), "Upload received");

    let outcome = state
        .upload_document_handler
        .handle(UploadDocument { file_name, bytes })
        .await?;

    Ok(Json(ApiResponse::success(UploadResponse::from(outcome))))
}

/// 获取已上传文件的片段
pub async fn get_segments(
    State(state): State<Arc<AppState>>,
    Path(file_id): Path<String>,
) -> Result<Json<ApiResponse<FileSegmentsDto>>, ApiError> {
    let response = state
        .get_segments_handler
        .handle(GetSegments { file_id })
        .await?;

    Ok(Json(ApiResponse::success(FileSegmentsDto::from(response))))
}

/// 导出写入译文后的 IDML（application/zip 附件）
pub async fn export_file(
    State(state): State<Arc<AppState>>,
    Path(file_id): Path<String>,
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;

    let result = state
        .export_document_handler
        .handle(ExportDocument {
            file_id,
            replacements: request.replacements,
        })
        .await?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        result.download_name.replace(['"', '\\'], "_")
    );
    let disposition = HeaderValue::from_str(&disposition)
        .map_err(|e| ApiError::Internal(format!("Invalid download name: {}", e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/zip")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        result.bytes,
    )
        .into_response())
}

/// 列出已上传的文件（最新的在前）
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<FileMeta>>>, ApiError> {
    let files = state.list_files_handler.handle(ListFiles).await?;
    Ok(Json(ApiResponse::success(files)))
}

/// 存储统计
pub async fn storage_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<RegistryStats>>, ApiError> {
    let stats = state.get_storage_stats_handler.handle(GetStorageStats).await?;
    Ok(Json(ApiResponse::success(stats)))
}
