//! IDML Segments - InDesign 文档的片段提取与译文回写服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - IDML Engine: 包检查、容器枚举、片段提取、片段替换、良构性校验
//! - Translation: 翻译模式
//!
//! 应用层 (application/):
//! - Ports: 端口定义（FileRegistry, Translator）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: FileRegistry 内存实现
//! - Adapters: Stub / HTTP Translator

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use domain::idml::{list_segments, replace_segments, Replacement, Segment};
