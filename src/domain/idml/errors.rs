//! IDML Engine - Errors

use thiserror::Error;

/// IDML 引擎错误
///
/// 只有结构性问题（无法打开的压缩包、缺少 manifest/stories、损坏的 story XML）
/// 会中止整个调用；单个片段的编码问题在替换器内部降级处理，不会出现在这里。
#[derive(Debug, Error)]
pub enum IdmlError {
    /// 输入不是可解析的 IDML 包或容器
    #[error("{0}")]
    InvalidInput(String),

    /// 序列化压缩包失败
    #[error("Failed to write archive: {0}")]
    Archive(String),
}

impl IdmlError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
