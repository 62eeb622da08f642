//! HTTP Translator - 调用外部翻译 HTTP 服务
//!
//! 外部翻译 API:
//! POST {base_url}/translate
//! Request:  {"text": "...", "mode": "lipsum"}
//! Response: {"translatedText": "..."}
//!
//! POST {base_url}/translate/batch
//! Request:  {"items": [{"text": "..."}], "mode": "lipsum"}
//! Response: {"items": [{"translatedText": "..."}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{TranslateError, TranslatorPort};
use crate::domain::TranslationMode;

#[derive(Debug, Serialize)]
struct TranslateHttpRequest<'a> {
    text: &'a str,
    mode: TranslationMode,
}

#[derive(Debug, Serialize)]
struct BatchItem<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct TranslateBatchHttpRequest<'a> {
    items: Vec<BatchItem<'a>>,
    mode: TranslationMode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatedItem {
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct TranslateBatchHttpResponse {
    items: Vec<TranslatedItem>,
}

/// HTTP 翻译客户端配置
#[derive(Debug, Clone)]
pub struct HttpTranslatorConfig {
    /// 翻译服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpTranslatorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpTranslatorConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 翻译客户端
pub struct HttpTranslator {
    client: Client,
    config: HttpTranslatorConfig,
}

impl HttpTranslator {
    pub fn new(config: HttpTranslatorConfig) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TranslateError::NetworkError(e.to_string()))?;

        tracing::info!(base_url = %config.base_url, "HttpTranslator initialized");
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// 发送 JSON 请求并解析 JSON 响应
    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, TranslateError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(url = %url, "Sending translate request");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TranslateError::Timeout
                } else if e.is_connect() {
                    TranslateError::NetworkError(format!("Cannot connect to translator: {}", e))
                } else {
                    TranslateError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TranslateError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| TranslateError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl TranslatorPort for HttpTranslator {
    async fn translate(&self, text: &str, mode: TranslationMode) -> Result<String, TranslateError> {
        let request = TranslateHttpRequest { text, mode };
        let response: TranslatedItem = self.post_json("/translate", &request).await?;
        Ok(response.translated_text)
    }

    async fn translate_batch(
        &self,
        texts: &[String],
        mode: TranslationMode,
    ) -> Result<Vec<String>, TranslateError> {
        let request = TranslateBatchHttpRequest {
            items: texts.iter().map(|text| BatchItem { text }).collect(),
            mode,
        };
        let response: TranslateBatchHttpResponse =
            self.post_json("/translate/batch", &request).await?;

        if response.items.len() != texts.len() {
            return Err(TranslateError::InvalidResponse(format!(
                "expected {} items, got {}",
                texts.len(),
                response.items.len()
            )));
        }

        tracing::info!(items = texts.len(), mode = %mode, "Batch translated by remote provider");
        Ok(response
            .items
            .into_iter()
            .map(|item| item.translated_text)
            .collect())
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.url("/healthz"))
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
