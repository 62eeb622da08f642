//! Domain Layer - 领域层
//!
//! - idml: IDML 片段提取 / 替换引擎（纯函数，无 I/O）
//! - translation: 翻译相关值对象

pub mod idml;
mod translation;

pub use translation::TranslationMode;
