//! File Commands - 上传与导出

use crate::domain::idml::Replacement;

/// 上传文档命令（单个 .idml 或包含多个 .idml 的 .zip）
#[derive(Debug, Clone)]
pub struct UploadDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// 导出译文文档命令
#[derive(Debug, Clone)]
pub struct ExportDocument {
    pub file_id: String,
    pub replacements: Vec<Replacement>,
}
