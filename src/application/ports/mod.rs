//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod file_registry;
mod translator;

pub use file_registry::{FileMeta, FileRegistryPort, RegistryError, RegistryStats, StoredFile};
pub use translator::{TranslateError, TranslatorPort};
