//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{RegistryError, TranslateError};
use crate::domain::idml::IdmlError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 上传内容不是可用的 IDML / ZIP
    #[error("{0}")]
    InvalidInput(String),

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 不支持的文件类型
    #[error("Unsupported file type: {0}")]
    UnsupportedMediaType(String),

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<IdmlError> for ApplicationError {
    fn from(err: IdmlError) -> Self {
        match err {
            IdmlError::InvalidInput(msg) => Self::InvalidInput(msg),
            IdmlError::Archive(msg) => Self::InternalError(msg),
        }
    }
}

impl From<RegistryError> for ApplicationError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(id) => Self::not_found("File", id),
        }
    }
}

impl From<TranslateError> for ApplicationError {
    fn from(err: TranslateError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ApplicationError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::InternalError(format!("Blocking task failed: {}", err))
    }
}
