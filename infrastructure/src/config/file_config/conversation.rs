//! Conversation configuration from TOML (`[conversation]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConversationConfig {
    /// Turns kept as context; older ones are dropped (0 = keep all)
    pub max_turns: usize,
    /// JSONL transcript destination (disabled when unset)
    pub transcript_file: Option<String>,
}

impl Default for FileConversationConfig {
    fn default() -> Self {
        Self {
            max_turns: 50,
            transcript_file: None,
        }
    }
}
