//! Chat completions generator

use super::types::{CompletionRequest, CompletionResponse, ErrorBody};
use crate::config::FileProviderConfig;
use async_trait::async_trait;
use cityguide_application::{GenerationError, ResponseGenerator};
use cityguide_domain::{Turn, build_chat_messages};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while setting up the generator (before any request)
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("No API key: set the {env} environment variable or provider.api_key")]
    MissingCredential { env: String },

    #[error("Invalid provider configuration: {0}")]
    InvalidConfig(String),

    #[error("Cannot build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Resolved settings for [`ChatCompletionsGenerator`]
#[derive(Debug, Clone)]
pub struct ChatCompletionsConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: Option<u32>,
}

impl ChatCompletionsConfig {
    /// Resolve the `[provider]` section, reading the API key from the environment.
    pub fn from_file_config(config: &FileProviderConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| ProviderError::MissingCredential {
                env: config.api_key_env.clone(),
            })?;

        if config.model.trim().is_empty() {
            return Err(ProviderError::InvalidConfig("model cannot be empty".into()));
        }

        Ok(Self {
            base_url: config.base_url.clone(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Generator backed by an OpenAI-compatible HTTP API
pub struct ChatCompletionsGenerator {
    client: reqwest::Client,
    config: ChatCompletionsConfig,
}

impl ChatCompletionsGenerator {
    pub fn new(config: ChatCompletionsConfig) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| ProviderError::InvalidConfig("API key is not a valid header".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build from the `[provider]` config section.
    pub fn from_file_config(config: &FileProviderConfig) -> Result<Self, ProviderError> {
        Self::new(ChatCompletionsConfig::from_file_config(config)?)
    }

    async fn rejection(response: reqwest::Response) -> GenerationError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error.message)
            .unwrap_or(body);
        GenerationError::Rejected { status, message }
    }
}

#[async_trait]
impl ResponseGenerator for ChatCompletionsGenerator {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(
        &self,
        system_prompt: &str,
        history: &[Turn],
        message: &str,
    ) -> Result<String, GenerationError> {
        let request = CompletionRequest {
            model: &self.config.model,
            messages: build_chat_messages(system_prompt, history, message),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };
        debug!(
            messages = request.messages.len(),
            "POST {}",
            self.config.endpoint()
        );

        let response = self
            .client
            .post(self.config.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::ConnectionError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::ConnectionError(e.to_string()))?;
        let completion: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        match completion.into_content() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(GenerationError::EmptyCompletion),
        }
    }
}
