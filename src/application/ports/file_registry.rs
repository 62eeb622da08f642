//! File Registry Port - 上传文件的临时存储
//!
//! 进程内、有容量上限的键值存储，具体实现在 infrastructure/memory 层

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// File Registry 错误
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("File not found: {0}")]
    NotFound(String),
}

/// 已存储的文件
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub bytes: Arc<Vec<u8>>,
    pub name: String,
    pub size: usize,
    pub created_at: DateTime<Utc>,
}

impl StoredFile {
    pub fn new(bytes: Vec<u8>, name: impl Into<String>) -> Self {
        Self {
            size: bytes.len(),
            bytes: Arc::new(bytes),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

/// 文件元数据（不含内容）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub id: String,
    pub name: String,
    pub size: usize,
    pub created_at: DateTime<Utc>,
}

/// 存储统计
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStats {
    pub count: usize,
    pub total_bytes: usize,
    pub oldest_at: Option<DateTime<Utc>>,
    pub newest_at: Option<DateTime<Utc>>,
    pub max_files: usize,
}

/// File Registry Port
///
/// id 对调用方是不透明的；超过容量时最早创建的文件被淘汰
pub trait FileRegistryPort: Send + Sync {
    /// 存储文件（同 id 覆盖并成为最新）
    fn put(&self, id: &str, bytes: Vec<u8>, name: &str);

    /// 获取文件
    fn get(&self, id: &str) -> Result<StoredFile, RegistryError>;

    /// 文件是否存在
    fn contains(&self, id: &str) -> bool;

    /// 删除文件，返回是否存在过
    fn remove(&self, id: &str) -> bool;

    /// 所有文件的元数据，最新的在前
    fn list(&self) -> Vec<FileMeta>;

    /// 清空
    fn clear(&self);

    /// 统计信息
    fn stats(&self) -> RegistryStats;
}
