//! Client for guessit-rest compatible services (`GET /?filename=<name>`).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::{EnrichmentConfig, EnrichmentError, NameGuesser};

/// guessit-rest HTTP client.
pub struct GuessitRestClient {
    client: Client,
    base_url: String,
}

impl GuessitRestClient {
    /// Create a new client.
    pub fn new(config: &EnrichmentConfig) -> Result<Self, EnrichmentError> {
        if !(config.url.starts_with("http://") || config.url.starts_with("https://")) {
            return Err(EnrichmentError::NotConfigured(format!(
                "enrichment URL must be http(s): {}",
                config.url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl NameGuesser for GuessitRestClient {
    fn name(&self) -> &str {
        "guessit-rest"
    }

    async fn guess(&self, text: &str) -> Result<Value, EnrichmentError> {
        let url = format!("{}/", self.base_url);

        debug!("guessit lookup: filename='{}'", text);

        let response = self
            .client
            .get(&url)
            .query(&[("filename", text)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EnrichmentError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        response.json().await.map_err(|e| {
            EnrichmentError::ParseError(format!("Failed to parse guessit response: {}", e))
        })
    }
}
