//! Translate Command Handlers

use std::sync::Arc;

use crate::application::commands::{TranslateBatch, TranslateText};
use crate::application::error::ApplicationError;
use crate::application::ports::TranslatorPort;

/// TranslateText Handler
pub struct TranslateTextHandler {
    translator: Arc<dyn TranslatorPort>,
}

impl TranslateTextHandler {
    pub fn new(translator: Arc<dyn TranslatorPort>) -> Self {
        Self { translator }
    }

    pub async fn handle(&self, command: TranslateText) -> Result<String, ApplicationError> {
        if command.text.is_empty() {
            return Err(ApplicationError::validation("text must not be empty"));
        }

        let translated = self.translator.translate(&command.text, command.mode).await?;

        tracing::debug!(
            mode = %command.mode,
            chars = command.text.chars().count(),
            "Text translated"
        );

        Ok(translated)
    }
}

/// TranslateBatch Handler
pub struct TranslateBatchHandler {
    translator: Arc<dyn TranslatorPort>,
}

impl TranslateBatchHandler {
    pub fn new(translator: Arc<dyn TranslatorPort>) -> Self {
        Self { translator }
    }

    pub async fn handle(&self, command: TranslateBatch) -> Result<Vec<String>, ApplicationError> {
        if command.items.is_empty() {
            return Err(ApplicationError::validation("items must not be empty"));
        }

        let translated = self
            .translator
            .translate_batch(&command.items, command.mode)
            .await?;

        if translated.len() != command.items.len() {
            return Err(ApplicationError::ExternalServiceError(format!(
                "Translator returned {} items for {} inputs",
                translated.len(),
                command.items.len()
            )));
        }

        tracing::info!(
            mode = %command.mode,
            items = translated.len(),
            "Batch translated"
        );

        Ok(translated)
    }
}
