//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    ExportDocumentHandler, TranslateBatchHandler, TranslateTextHandler, UploadDocumentHandler,
    // Query handlers
    GetSegmentsHandler, GetStorageStatsHandler, ListFilesHandler,
    // Ports
    FileRegistryPort, TranslatorPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub registry: Arc<dyn FileRegistryPort>,
    pub translator: Arc<dyn TranslatorPort>,

    // ========== Command Handlers ==========
    pub upload_document_handler: UploadDocumentHandler,
    pub export_document_handler: ExportDocumentHandler,
    pub translate_text_handler: TranslateTextHandler,
    pub translate_batch_handler: TranslateBatchHandler,

    // ========== Query Handlers ==========
    pub get_segments_handler: GetSegmentsHandler,
    pub list_files_handler: ListFilesHandler,
    pub get_storage_stats_handler: GetStorageStatsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(registry: Arc<dyn FileRegistryPort>, translator: Arc<dyn TranslatorPort>) -> Self {
        Self {
            // Ports
            registry: registry.clone(),
            translator: translator.clone(),

            // Command handlers
            upload_document_handler: UploadDocumentHandler::new(registry.clone()),
            export_document_handler: ExportDocumentHandler::new(registry.clone()),
            translate_text_handler: TranslateTextHandler::new(translator.clone()),
            translate_batch_handler: TranslateBatchHandler::new(translator),

            // Query handlers
            get_segments_handler: GetSegmentsHandler::new(registry.clone()),
            list_files_handler: ListFilesHandler::new(registry.clone()),
            get_storage_stats_handler: GetStorageStatsHandler::new(registry),
        }
    }
}
