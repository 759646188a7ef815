//! City entity

use serde::{Deserialize, Serialize};

/// A city with the facts the guide can answer about (Entity)
///
/// Values are display strings taken verbatim from the fact table;
/// no unit conversion or localization happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Display name, also the case-insensitive match key
    pub name: String,
    /// Population as shown to the user (e.g. "2,9 milhões")
    pub population: String,
    /// Landmarks in presentation order
    pub landmarks: Vec<String>,
    /// Affiliated university
    pub university: String,
}

impl City {
    pub fn new(
        name: impl Into<String>,
        population: impl Into<String>,
        landmarks: impl IntoIterator<Item = impl Into<String>>,
        university: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            population: population.into(),
            landmarks: landmarks.into_iter().map(Into::into).collect(),
            university: university.into(),
        }
    }

    /// Lowercased, trimmed name used for matching against questions
    pub fn match_key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
