//! Translate Commands

use crate::domain::TranslationMode;

/// 翻译单条文本命令
#[derive(Debug, Clone)]
pub struct TranslateText {
    pub text: String,
    pub mode: TranslationMode,
}

/// 批量翻译命令
#[derive(Debug, Clone)]
pub struct TranslateBatch {
    pub items: Vec<String>,
    pub mode: TranslationMode,
}
