//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（FileRegistry、Translator）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // File commands
    ExportDocument,
    UploadDocument,
    // Translate commands
    TranslateBatch,
    TranslateText,
    // Handlers
    handlers::{
        ExportDocumentHandler, ExportResult, TranslateBatchHandler, TranslateTextHandler,
        UploadDocumentHandler, UploadOutcome, UploadedFile,
    },
};

pub use error::ApplicationError;

pub use ports::{
    // File registry
    FileMeta,
    FileRegistryPort,
    RegistryError,
    RegistryStats,
    StoredFile,
    // Translator
    TranslateError,
    TranslatorPort,
};

pub use queries::{
    GetSegments,
    GetStorageStats,
    ListFiles,
    // Handlers
    handlers::{GetSegmentsHandler, GetStorageStatsHandler, ListFilesHandler, SegmentsResponse},
};
