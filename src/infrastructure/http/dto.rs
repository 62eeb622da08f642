//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{SegmentsResponse, UploadOutcome, UploadedFile};
use crate::domain::idml::{Replacement, Segment};
use crate::domain::TranslationMode;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Health DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

// ============================================================================
// File DTOs
// ============================================================================

/// 单个包的上传/查询结果
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSegmentsDto {
    pub file_id: String,
    pub original_name: String,
    pub segments: Vec<Segment>,
}

impl From<SegmentsResponse> for FileSegmentsDto {
    fn from(response: SegmentsResponse) -> Self {
        Self {
            file_id: response.file_id,
            original_name: response.original_name,
            segments: response.segments,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchFileDto {
    pub file_id: String,
    pub name: String,
    pub segments: Vec<Segment>,
}

impl From<UploadedFile> for BatchFileDto {
    fn from(file: UploadedFile) -> Self {
        Self {
            file_id: file.file_id,
            name: file.name,
            segments: file.segments,
        }
    }
}

/// 上传响应：单个包或批次
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UploadResponse {
    Single(FileSegmentsDto),
    #[serde(rename_all = "camelCase")]
    Batch {
        original_name: String,
        files: Vec<BatchFileDto>,
    },
}

impl From<UploadOutcome> for UploadResponse {
    fn from(outcome: UploadOutcome) -> Self {
        match outcome {
            UploadOutcome::Single {
                file_id,
                original_name,
                segments,
            } => Self::Single(FileSegmentsDto {
                file_id,
                original_name,
                segments,
            }),
            UploadOutcome::Batch {
                original_name,
                files,
            } => Self::Batch {
                original_name,
                files: files.into_iter().map(BatchFileDto::from).collect(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub replacements: Vec<Replacement>,
}

// ============================================================================
// Translate DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default)]
    pub mode: TranslationMode,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedText {
    pub translated_text: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchTextItem {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslateBatchRequest {
    pub items: Vec<BatchTextItem>,
    #[serde(default)]
    pub mode: TranslationMode,
}

#[derive(Debug, Serialize)]
pub struct TranslateBatchResponse {
    pub items: Vec<TranslatedText>,
}
