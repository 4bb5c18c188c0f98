//! DeepLX translation client

use std::time::Duration;
use tracing::debug;

use crate::core::config::FilterConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::TranslationRequest;

/// Fixed bound on the outbound call; there is no retry
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client over a DeepLX-compatible translation endpoint
#[derive(Debug, Clone)]
pub struct DeepLxClient {
    client: reqwest::Client,
    api_url: String,
}

impl DeepLxClient {
    /// Create a client for the configured endpoint
    pub fn new(config: &FilterConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = FilterConfig::load()?;
        Self::new(&config)
    }

    /// Translate one block of text. One POST, no retry.
    pub async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let request = TranslationRequest::new(text, source, target);

        debug!("Translating {} chars {} -> {}", text.len(), source, target);

        let response = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranslationError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let json: serde_json::Value =
            response
                .json()
                .await
                .map_err(|e| TranslationError::InvalidResponseError {
                    message: e.to_string(),
                })?;

        let translated = json["data"]
            .as_str()
            .ok_or_else(|| TranslationError::InvalidResponseError {
                message: "no `data` field in response".to_string(),
            })?
            .to_string();

        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = FilterConfig::default();
        assert!(DeepLxClient::new(&config).is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = FilterConfig {
            api_url: String::new(),
            ..Default::default()
        };
        assert!(DeepLxClient::new(&config).is_err());
    }

    #[tokio::test]
    async fn test_translate_maps_connect_failure_to_network_error() {
        // Port 1 is never listening; connect fails immediately
        let config = FilterConfig {
            api_url: "http://127.0.0.1:1/translate".to_string(),
            ..Default::default()
        };
        let client = DeepLxClient::new(&config).unwrap();

        let err = client.translate("hello", "auto", "zh").await.unwrap_err();
        assert!(matches!(err, TranslationError::NetworkError { .. }));
    }
}
