//! File Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{ExportDocument, UploadDocument};
use crate::application::error::ApplicationError;
use crate::application::ports::FileRegistryPort;
use crate::domain::idml::{self, EmbeddedPackage, IdmlError, Segment};

// ============================================================================
// UploadDocument
// ============================================================================

/// 已登记的单个 IDML 包
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_id: String,
    pub name: String,
    pub segments: Vec<Segment>,
}

/// 上传结果：单个包直接返回，多个包按批次返回
#[derive(Debug, Clone)]
pub enum UploadOutcome {
    Single {
        file_id: String,
        original_name: String,
        segments: Vec<Segment>,
    },
    Batch {
        original_name: String,
        files: Vec<UploadedFile>,
    },
}

/// UploadDocument Handler - 拆包、提取片段并登记到 registry
pub struct UploadDocumentHandler {
    registry: Arc<dyn FileRegistryPort>,
}

impl UploadDocumentHandler {
    pub fn new(registry: Arc<dyn FileRegistryPort>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, command: UploadDocument) -> Result<UploadOutcome, ApplicationError> {
        let lower = command.file_name.to_lowercase();
        let is_idml = lower.ends_with(".idml");
        if !is_idml && !lower.ends_with(".zip") {
            return Err(ApplicationError::UnsupportedMediaType(command.file_name));
        }

        let bytes = command.bytes;
        let mut extracted = tokio::task::spawn_blocking(move || extract_packages(&bytes)).await??;

        if extracted.len() == 1 {
            if let Some((package, segments)) = extracted.pop() {
                let name = if is_idml { command.file_name } else { package.name };
                let file_id = Uuid::new_v4().to_string();
                self.registry.put(&file_id, package.bytes, &name);

                tracing::info!(
                    file_id = %file_id,
                    name = %name,
                    segments = segments.len(),
                    "Document uploaded"
                );

                return Ok(UploadOutcome::Single {
                    file_id,
                    original_name: name,
                    segments,
                });
            }
        }

        let files: Vec<UploadedFile> = extracted
            .into_iter()
            .map(|(package, segments)| {
                let file_id = Uuid::new_v4().to_string();
                self.registry.put(&file_id, package.bytes, &package.name);
                UploadedFile {
                    file_id,
                    name: package.name,
                    segments,
                }
            })
            .collect();

        tracing::info!(
            container = %command.file_name,
            packages = files.len(),
            "Container uploaded"
        );

        Ok(UploadOutcome::Batch {
            original_name: command.file_name,
            files,
        })
    }
}

/// 枚举上传内容中的包并逐个提取片段
fn extract_packages(bytes: &[u8]) -> Result<Vec<(EmbeddedPackage, Vec<Segment>)>, IdmlError> {
    let mut extracted = Vec::new();
    for package in idml::enumerate_packages(bytes, None, true)? {
        let segments = idml::list_segments(&package.bytes)?;
        extracted.push((package, segments));
    }
    Ok(extracted)
}

// ============================================================================
// ExportDocument
// ============================================================================

/// 导出结果
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub bytes: Vec<u8>,
    pub download_name: String,
}

/// ExportDocument Handler - 把译文写回已登记的包
pub struct ExportDocumentHandler {
    registry: Arc<dyn FileRegistryPort>,
}

impl ExportDocumentHandler {
    pub fn new(registry: Arc<dyn FileRegistryPort>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, command: ExportDocument) -> Result<ExportResult, ApplicationError> {
        if command.replacements.is_empty() {
            return Err(ApplicationError::validation("No replacements"));
        }
        if command.replacements.iter().any(|r| r.story_path.is_empty()) {
            return Err(ApplicationError::validation("storyPath must not be empty"));
        }

        let stored = self.registry.get(&command.file_id)?;
        let requested = command.replacements.len();

        let source = Arc::clone(&stored.bytes);
        let replacements = command.replacements;
        let bytes = tokio::task::spawn_blocking(move || {
            idml::replace_segments(&source, &replacements)
        })
        .await??;

        let download_name = download_name(&stored.name);

        tracing::info!(
            file_id = %command.file_id,
            replacements = requested,
            size = bytes.len(),
            "Document exported"
        );

        Ok(ExportResult {
            bytes,
            download_name,
        })
    }
}

/// 去掉 `.idml` 后缀（大小写不敏感）再补上 `.idml`
fn download_name(name: &str) -> String {
    let stem = match name.len().checked_sub(5) {
        Some(cut) if name.is_char_boundary(cut) && name[cut..].eq_ignore_ascii_case(".idml") => {
            &name[..cut]
        }
        _ => name,
    };
    format!("{}.idml", stem)
}
