//! Fact table configuration from TOML (`[facts]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFactsConfig {
    /// TOML fact table replacing the built-in one
    pub file: Option<String>,
}
