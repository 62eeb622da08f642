//! Translator Adapter - 翻译 provider 实现

mod http_translator;
mod stub_translator;

pub use http_translator::{HttpTranslator, HttpTranslatorConfig};
pub use stub_translator::{StubTranslator, StubTranslatorConfig, TRANSLATED_MARKER};
