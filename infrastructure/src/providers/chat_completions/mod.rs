//! OpenAI-compatible chat completions client

mod generator;
mod types;

pub use generator::{ChatCompletionsConfig, ChatCompletionsGenerator, ProviderError};
