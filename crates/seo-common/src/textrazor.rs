use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::OracleError;
use crate::oracle::{ExtractionOracle, OraclePayload};

/// Facets requested from TextRazor on every call.
pub const EXTRACTORS: &str = "entities,topics,words,phrases,relations,entailments,senses";

const API_KEY_HEADER: &str = "x-textrazor-key";

#[derive(Clone, Debug)]
pub struct TextRazorConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub max_error_body_bytes: usize,
}

impl TextRazorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url =
            lookup("TEXTRAZOR_URL").unwrap_or_else(|| "https://api.textrazor.com".to_string());

        let api_key = lookup("TEXTRAZOR_API_KEY").filter(|k| !k.trim().is_empty());

        let timeout = lookup("TEXTRAZOR_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(10));

        let max_error_body_bytes = lookup("TEXTRAZOR_MAX_ERROR_BODY_BYTES")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(8 * 1024);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout,
            max_error_body_bytes,
        }
    }
}

/// HTTP client for the TextRazor analysis endpoint.
///
/// One attempt per call, bounded by `config.timeout`. Retrying is left to the
/// caller; the analyzer never does, it falls back instead.
#[derive(Clone)]
pub struct TextRazorClient {
    config: TextRazorConfig,
    api_key: String,
    http: reqwest::Client,
}

impl TextRazorClient {
    pub fn new(config: TextRazorConfig) -> Result<Self, OracleError> {
        let api_key = config.api_key.clone().ok_or(OracleError::NotConfigured)?;
        let http = reqwest::Client::builder()
            .user_agent("seo-analyzer/textrazor")
            .build()?;
        Ok(Self {
            config,
            api_key,
            http,
        })
    }

    pub fn config(&self) -> &TextRazorConfig {
        &self.config
    }

    async fn parse_json_response(
        resp: reqwest::Response,
        max_error_body_bytes: usize,
    ) -> Result<OraclePayload, OracleError> {
        let status = resp.status();
        if status.is_success() {
            let bytes = resp.bytes().await?;
            return Ok(serde_json::from_slice(&bytes)?);
        }
        let body = read_limited_text(resp, max_error_body_bytes).await;
        Err(OracleError::Upstream { status, body })
    }
}

#[async_trait]
impl ExtractionOracle for TextRazorClient {
    async fn extract(&self, text: &str) -> Result<OraclePayload, OracleError> {
        let url = format!("{}/", self.config.base_url);
        debug!(url, text_len = text.len(), "calling textrazor");
        let resp = self
            .http
            .post(&url)
            .timeout(self.config.timeout)
            .header(API_KEY_HEADER, &self.api_key)
            .form(&[("text", text), ("extractors", EXTRACTORS)])
            .send()
            .await?;
        Self::parse_json_response(resp, self.config.max_error_body_bytes).await
    }
}

async fn read_limited_text(resp: reqwest::Response, max_bytes: usize) -> String {
    match resp.bytes().await {
        Ok(mut b) => {
            if b.len() > max_bytes {
                b.truncate(max_bytes);
            }
            String::from_utf8_lossy(&b).to_string()
        }
        Err(e) => {
            warn!(error = %e, "failed to read upstream error body");
            "<failed to read error body>".to_string()
        }
    }
}
