//! Translator Port - 翻译服务抽象
//!
//! 对核心引擎来说只是一个文本到文本的函数，延迟和译文质量由 provider 负责

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::TranslationMode;

/// 翻译错误
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Translator Port
#[async_trait]
pub trait TranslatorPort: Send + Sync {
    /// 翻译单条文本
    async fn translate(&self, text: &str, mode: TranslationMode) -> Result<String, TranslateError>;

    /// 批量翻译，结果与输入一一对应
    async fn translate_batch(
        &self,
        texts: &[String],
        mode: TranslationMode,
    ) -> Result<Vec<String>, TranslateError>;

    /// 检查翻译服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
