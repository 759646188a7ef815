//! Configuration file loading for city-guide
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables: `CITY_GUIDE_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./cityguide.toml` or `./.cityguide.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/city-guide/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileConversationConfig, FileFactsConfig, FileLoggingConfig, FileOutputConfig,
    FileProviderConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
