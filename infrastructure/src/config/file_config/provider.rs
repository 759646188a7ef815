//! Provider configuration from TOML (`[provider]` section)

use cityguide_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completions backend (Groq by default).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable name for the API key (default: "GROQ_API_KEY").
    pub api_key_env: String,
    /// Direct API key; prefer `api_key_env`.
    pub api_key: Option<String>,
    /// Base URL; `/v1/chat/completions` is appended.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Max tokens per response (provider default when unset).
    pub max_tokens: Option<u32>,
    /// Timeout for one generation request, in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GROQ_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.groq.com/openai".to_string(),
            model: "gemma2-9b-it".to_string(),
            temperature: 0.7,
            max_tokens: None,
            timeout_seconds: 30,
        }
    }
}

impl FileProviderConfig {
    /// Direct key if configured, otherwise the value of `api_key_env`.
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error("provider.base_url", "cannot be empty"));
        }
        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error("provider.model", "cannot be empty"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(ConfigIssue::warning(
                "provider.temperature",
                format!("{} is outside 0.0..=2.0", self.temperature),
            ));
        }
        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                "provider.timeout_seconds",
                "cannot be 0",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_key_wins_over_env() {
        let config = FileProviderConfig {
            api_key: Some("direct".to_string()),
            api_key_env: "CITY_GUIDE_TEST_UNSET_KEY".to_string(),
            ..Default::default()
        };
        assert_eq!(config.api_key().as_deref(), Some("direct"));
    }

    #[test]
    fn test_missing_key_is_none() {
        let config = FileProviderConfig {
            api_key_env: "CITY_GUIDE_TEST_SURELY_UNSET_KEY".to_string(),
            ..Default::default()
        };
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_blank_key_is_none() {
        let config = FileProviderConfig {
            api_key: Some("  ".to_string()),
            api_key_env: "CITY_GUIDE_TEST_SURELY_UNSET_KEY".to_string(),
            ..Default::default()
        };
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_temperature_out_of_range_is_warning() {
        let config = FileProviderConfig {
            temperature: 3.5,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }
}
