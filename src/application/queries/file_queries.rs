//! File Queries

/// 获取已登记文件的片段
#[derive(Debug, Clone)]
pub struct GetSegments {
    pub file_id: String,
}

/// 列出所有已登记的文件
#[derive(Debug, Clone)]
pub struct ListFiles;

/// 获取存储统计
#[derive(Debug, Clone)]
pub struct GetStorageStats;
