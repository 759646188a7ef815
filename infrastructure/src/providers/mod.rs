//! Response generator adapters
//!
//! [`ChatCompletionsGenerator`] implements the application's
//! `ResponseGenerator` port against any OpenAI-compatible
//! `/v1/chat/completions` endpoint (Groq by default).

mod chat_completions;

pub use chat_completions::{ChatCompletionsConfig, ChatCompletionsGenerator, ProviderError};
