//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, TranslatorProvider};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "IDML";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `IDML_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `IDML_SERVER__PORT=8080`
/// - `IDML_STORAGE__MAX_FILES=500`
/// - `IDML_TRANSLATOR__PROVIDER=http`
/// - `IDML_TRANSLATOR__URL=http://translator:9000`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 4000)?
        .set_default("storage.max_files", 100)?
        .set_default("storage.max_upload_size", 50 * 1024 * 1024)?
        .set_default("translator.provider", "stub")?
        .set_default("translator.url", "")?
        .set_default("translator.timeout_secs", 30)?
        .set_default("translator.stub_delay_ms", 300)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级），例如 IDML_TRANSLATOR__URL
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.storage.max_files == 0 {
        return Err(ConfigError::ValidationError(
            "storage.max_files must be at least 1".to_string(),
        ));
    }

    if config.storage.max_upload_size == 0 {
        return Err(ConfigError::ValidationError(
            "storage.max_upload_size cannot be 0".to_string(),
        ));
    }

    if config.translator.provider == TranslatorProvider::Http && config.translator.url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "translator.url is required when provider is http".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Files: {}", config.storage.max_files);
    tracing::info!("Max Upload Size: {} bytes", config.storage.max_upload_size);
    tracing::info!("Translator: {}", config.translator.provider.as_str());
    match config.translator.provider {
        TranslatorProvider::Http => {
            tracing::info!("Translator URL: {}", config.translator.url);
            tracing::info!("Translator Timeout: {}s", config.translator.timeout_secs);
        }
        TranslatorProvider::Stub => {
            tracing::info!("Stub Delay: {}ms", config.translator.stub_delay_ms);
        }
    }
    tracing::info!("Log Level: {} (json: {})", config.log.level, config.log.json);
    tracing::info!("=================================");
}
