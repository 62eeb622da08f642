//! File Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{FileMeta, FileRegistryPort, RegistryStats};
use crate::application::queries::{GetSegments, GetStorageStats, ListFiles};
use crate::domain::idml::{self, Segment};

// ============================================================================
// Response DTOs
// ============================================================================

/// 文件片段响应
#[derive(Debug, Clone)]
pub struct SegmentsResponse {
    pub file_id: String,
    pub original_name: String,
    pub segments: Vec<Segment>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GetSegments Handler - 每次都从包字节重新提取
pub struct GetSegmentsHandler {
    registry: Arc<dyn FileRegistryPort>,
}

impl GetSegmentsHandler {
    pub fn new(registry: Arc<dyn FileRegistryPort>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, query: GetSegments) -> Result<SegmentsResponse, ApplicationError> {
        let stored = self.registry.get(&query.file_id)?;

        let bytes = Arc::clone(&stored.bytes);
        let segments = tokio::task::spawn_blocking(move || idml::list_segments(&bytes)).await??;

        Ok(SegmentsResponse {
            file_id: query.file_id,
            original_name: stored.name,
            segments,
        })
    }
}

/// ListFiles Handler
pub struct ListFilesHandler {
    registry: Arc<dyn FileRegistryPort>,
}

impl ListFilesHandler {
    pub fn new(registry: Arc<dyn FileRegistryPort>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, _query: ListFiles) -> Result<Vec<FileMeta>, ApplicationError> {
        Ok(self.registry.list())
    }
}

/// GetStorageStats Handler
pub struct GetStorageStatsHandler {
    registry: Arc<dyn FileRegistryPort>,
}

impl GetStorageStatsHandler {
    pub fn new(registry: Arc<dyn FileRegistryPort>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, _query: GetStorageStats) -> Result<RegistryStats, ApplicationError> {
        Ok(self.registry.stats())
    }
}
