//! Stub Translator - 不调用任何外部服务的翻译器
//!
//! 只做机械变换，用于本地开发和测试：
//! - lipsum: 原文后追加 ` [Translated]`
//! - reverse: 按字符反转

use async_trait::async_trait;
use std::time::Duration;

use crate::application::ports::{TranslateError, TranslatorPort};
use crate::domain::TranslationMode;

/// lipsum 模式追加的标记
pub const TRANSLATED_MARKER: &str = " [Translated]";

/// Stub Translator 配置
#[derive(Debug, Clone)]
pub struct StubTranslatorConfig {
    /// 模拟外部 provider 的延迟（毫秒），0 表示不等待
    pub delay_ms: u64,
}

impl Default for StubTranslatorConfig {
    fn default() -> Self {
        Self { delay_ms: 300 }
    }
}

/// Stub Translator
pub struct StubTranslator {
    config: StubTranslatorConfig,
}

impl StubTranslator {
    pub fn new(config: StubTranslatorConfig) -> Self {
        tracing::info!(delay_ms = config.delay_ms, "StubTranslator initialized");
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(StubTranslatorConfig::default())
    }

    async fn simulate_latency(&self) {
        if self.config.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;
        }
    }
}

/// 对单条文本做模式对应的变换
pub fn transform(text: &str, mode: TranslationMode) -> String {
    match mode {
        TranslationMode::Lipsum => format!("{}{}", text, TRANSLATED_MARKER),
        TranslationMode::Reverse => text.chars().rev().collect(),
    }
}

#[async_trait]
impl TranslatorPort for StubTranslator {
    async fn translate(&self, text: &str, mode: TranslationMode) -> Result<String, TranslateError> {
        self.simulate_latency().await;
        tracing::debug!(mode = %mode, text_len = text.len(), "StubTranslator: translating");
        Ok(transform(text, mode))
    }

    async fn translate_batch(
        &self,
        texts: &[String],
        mode: TranslationMode,
    ) -> Result<Vec<String>, TranslateError> {
        // 整批只等待一次
        self.simulate_latency().await;
        tracing::debug!(mode = %mode, items = texts.len(), "StubTranslator: translating batch");
        Ok(texts.iter().map(|text| transform(text, mode)).collect())
    }
}
