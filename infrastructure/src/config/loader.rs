//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["cityguide.toml", ".cityguide.toml"];

/// Prefix of environment overrides (`CITY_GUIDE_PROVIDER__MODEL=...`)
const ENV_PREFIX: &str = "CITY_GUIDE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `CITY_GUIDE_*` environment variables (`__` separates section and key)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./cityguide.toml` or `./.cityguide.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/city-guide/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Build the merged figment without extracting it
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/city-guide/config.toml if set,
    /// otherwise falls back to the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("city-guide").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./cityguide.toml or ./.cityguide.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.provider.model, "gemma2-9b-it");
        assert_eq!(config.conversation.max_turns, 50);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("city-guide"));
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "cityguide.toml",
                r#"
[provider]
model = "llama-3.1-8b-instant"

[conversation]
max_turns = 5
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.provider.model, "llama-3.1-8b-instant");
            assert_eq!(config.conversation.max_turns, 5);
            // Untouched sections keep defaults
            assert_eq!(config.provider.api_key_env, "GROQ_API_KEY");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("cityguide.toml", "[provider]\nmodel = \"project\"\n")?;
            jail.create_file("custom.toml", "[provider]\nmodel = \"explicit\"\n")?;

            let config =
                ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| e.to_string())?;
            assert_eq!(config.provider.model, "explicit");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("cityguide.toml", "[provider]\ntimeout_seconds = 10\n")?;
            jail.set_env("CITY_GUIDE_PROVIDER__TIMEOUT_SECONDS", "99");
            jail.set_env("CITY_GUIDE_OUTPUT__COLOR", "false");

            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.provider.timeout_seconds, 99);
            assert!(!config.output.color);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_type_is_reported() {
        Jail::expect_with(|jail| {
            jail.create_file("cityguide.toml", "[conversation]\nmax_turns = \"many\"\n")?;
            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}
