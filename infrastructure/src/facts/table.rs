//! TOML-backed fact table

use cityguide_domain::{City, DomainError, InMemoryFactStore};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const BUILTIN_TABLE: &str = include_str!("cities.toml");

#[derive(Error, Debug)]
pub enum FactTableError {
    #[error("Cannot read fact table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed fact table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid fact table: {0}")]
    Invalid(#[from] DomainError),
}

#[derive(Debug, Deserialize)]
struct FactTableDocument {
    #[serde(default, rename = "city")]
    cities: Vec<City>,
}

/// Loader for `[[city]]` TOML fact tables
pub struct TomlFactTable;

impl TomlFactTable {
    /// The fourteen Brazilian capitals compiled into the binary.
    pub fn builtin() -> Result<InMemoryFactStore, FactTableError> {
        Self::parse(BUILTIN_TABLE)
    }

    pub fn from_file(path: &Path) -> Result<InMemoryFactStore, FactTableError> {
        let content = std::fs::read_to_string(path).map_err(|source| FactTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::parse(&content)?;
        debug!("Loaded {} cities from {}", store.len(), path.display());
        Ok(store)
    }

    /// Parse a TOML document, rejecting empty and duplicate city names.
    pub fn parse(content: &str) -> Result<InMemoryFactStore, FactTableError> {
        let document: FactTableDocument = toml::from_str(content)?;
        Ok(InMemoryFactStore::new(document.cities)?)
    }
}
