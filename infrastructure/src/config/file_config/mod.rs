//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod conversation;
mod facts;
mod logging;
mod output;
mod provider;
mod repl;

pub use conversation::FileConversationConfig;
pub use facts::FileFactsConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use repl::FileReplConfig;

use cityguide_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generation backend settings
    pub provider: FileProviderConfig,
    /// Conversation history and transcript settings
    pub conversation: FileConversationConfig,
    /// Fact table source
    pub facts: FileFactsConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Diagnostic log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.provider.validate();

        if let Some(file) = &self.facts.file
            && file.trim().is_empty()
        {
            issues.push(ConfigIssue::warning(
                "facts.file",
                "empty path, using the built-in fact table",
            ));
        }

        issues
    }
}
