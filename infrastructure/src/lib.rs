//! Infrastructure layer for city-guide
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, configuration file loading, and the
//! fact table.

pub mod config;
pub mod facts;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileConversationConfig, FileFactsConfig, FileLoggingConfig,
    FileOutputConfig, FileProviderConfig, FileReplConfig,
};
pub use facts::{FactTableError, TomlFactTable};
pub use logging::JsonlConversationLogger;
pub use providers::{ChatCompletionsConfig, ChatCompletionsGenerator, ProviderError};
