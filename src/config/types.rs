//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 上传文件存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 翻译 provider 配置
    #[serde(default)]
    pub translator: TranslatorConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 内存中最多保留的文件数，超出时淘汰最早上传的
    #[serde(default = "default_max_files")]
    pub max_files: usize,

    /// 上传文件最大大小（字节），默认 50MB
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size: usize,
}

fn default_max_files() -> usize {
    100
}

fn default_max_upload_size() -> usize {
    50 * 1024 * 1024 // 50 MB
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            max_files: default_max_files(),
            max_upload_size: default_max_upload_size(),
        }
    }
}

/// 翻译 provider 类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslatorProvider {
    /// 本地机械变换
    #[default]
    Stub,
    /// 远程 HTTP 服务
    Http,
}

impl TranslatorProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stub => "stub",
            Self::Http => "http",
        }
    }
}

/// 翻译配置
#[derive(Debug, Clone, Deserialize)]
pub struct TranslatorConfig {
    /// provider 类型
    #[serde(default)]
    pub provider: TranslatorProvider,

    /// 远程翻译服务基础 URL（provider = http 时必填）
    #[serde(default)]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_translator_timeout")]
    pub timeout_secs: u64,

    /// stub 模拟延迟（毫秒）
    #[serde(default = "default_stub_delay")]
    pub stub_delay_ms: u64,
}

fn default_translator_timeout() -> u64 {
    30
}

fn default_stub_delay() -> u64 {
    300
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            provider: TranslatorProvider::default(),
            url: String::new(),
            timeout_secs: default_translator_timeout(),
            stub_delay_ms: default_stub_delay(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
