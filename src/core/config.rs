//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Default DeepLX endpoint
const DEFAULT_API_URL: &str = "https://deeplx.mingming.dev/translate";

/// Configuration for the translation filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// DeepLX translation endpoint
    pub api_url: String,
    /// Source language for user-authored messages
    pub source_user: String,
    /// Target language for user-authored messages
    pub target_user: String,
    /// Source language for assistant-authored messages
    pub source_assistant: String,
    /// Target language for assistant-authored messages
    pub target_assistant: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            source_user: "auto".to_string(),
            target_user: "en".to_string(),
            source_assistant: "en".to_string(),
            target_assistant: "zh".to_string(),
        }
    }
}

impl FilterConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            api_url: std::env::var("DEEPLX_API_URL").unwrap_or(defaults.api_url),
            source_user: std::env::var("SOURCE_USER").unwrap_or(defaults.source_user),
            target_user: std::env::var("TARGET_USER").unwrap_or(defaults.target_user),
            source_assistant: std::env::var("SOURCE_ASSISTANT").unwrap_or(defaults.source_assistant),
            target_assistant: std::env::var("TARGET_ASSISTANT").unwrap_or(defaults.target_assistant),
        })
    }

    /// Load and validate configuration
    pub fn load() -> anyhow::Result<Self> {
        let config = Self::from_env()?;
        config.validate()?;
        info!(
            "Loaded filter config: user {}->{}, assistant {}->{}",
            config.source_user, config.target_user,
            config.source_assistant, config.target_assistant
        );
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_url.is_empty() {
            return Err(anyhow::anyhow!("api_url is required"));
        }

        for (name, value) in [
            ("source_user", &self.source_user),
            ("target_user", &self.target_user),
            ("source_assistant", &self.source_assistant),
            ("target_assistant", &self.target_assistant),
        ] {
            if value.is_empty() {
                return Err(anyhow::anyhow!("{} must not be empty", name));
            }
        }

        Ok(())
    }

    /// Whether the user direction needs translation at all
    pub fn user_direction_active(&self) -> bool {
        self.source_user != self.target_user
    }

    /// Whether the assistant direction needs translation at all
    pub fn assistant_direction_active(&self) -> bool {
        self.source_assistant != self.target_assistant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FilterConfig::default();
        assert_eq!(config.source_user, "auto");
        assert_eq!(config.target_user, "en");
        assert_eq!(config.source_assistant, "en");
        assert_eq!(config.target_assistant, "zh");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_fields() {
        let config = FilterConfig {
            api_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = FilterConfig {
            target_user: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_direction_short_circuit() {
        let config = FilterConfig {
            source_user: "en".to_string(),
            target_user: "en".to_string(),
            ..Default::default()
        };
        assert!(!config.user_direction_active());
        assert!(config.assistant_direction_active());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filter.json");

        let config = FilterConfig {
            target_assistant: "fr".to_string(),
            ..Default::default()
        };
        config.to_file(&path).unwrap();

        let loaded = FilterConfig::from_file(&path).unwrap();
        assert_eq!(loaded.target_assistant, "fr");
        assert_eq!(loaded.api_url, config.api_url);
    }
}
