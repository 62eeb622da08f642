//! Memory Layer - In-Memory State Management
//!
//! 实现 FileRegistry，保存上传后的 IDML 包

mod file_registry;

pub use file_registry::InMemoryFileRegistry;
