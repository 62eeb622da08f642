//! IDML Segments - 片段提取与译文回写服务
//!
//! - Domain: idml/ (核心引擎), translation
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory, adapters

use std::sync::Arc;

use idml_segments::application::TranslatorPort;
use idml_segments::config::{load_config, print_config, AppConfig, TranslatorProvider};
use idml_segments::infrastructure::adapters::{
    HttpTranslator, HttpTranslatorConfig, StubTranslator, StubTranslatorConfig,
};
use idml_segments::infrastructure::http::{AppState, HttpServer, ServerConfig};
use idml_segments::infrastructure::memory::InMemoryFileRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("IDML Segments v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 上传文件存储
    let registry = InMemoryFileRegistry::new(config.storage.max_files).arc();

    // 翻译 provider
    let translator = build_translator(&config)?;

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.storage.max_upload_size);
    let state = AppState::new(registry, translator);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志，`RUST_LOG` 优先于配置文件中的级别
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},idml_segments={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn build_translator(config: &AppConfig) -> anyhow::Result<Arc<dyn TranslatorPort>> {
    let translator: Arc<dyn TranslatorPort> = match config.translator.provider {
        TranslatorProvider::Stub => Arc::new(StubTranslator::new(StubTranslatorConfig {
            delay_ms: config.translator.stub_delay_ms,
        })),
        TranslatorProvider::Http => {
            let http_config = HttpTranslatorConfig::new(config.translator.url.clone())
                .with_timeout(config.translator.timeout_secs);
            Arc::new(HttpTranslator::new(http_config)?)
        }
    };
    Ok(translator)
}
