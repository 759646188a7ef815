//! Attribute kind value object

use serde::{Deserialize, Serialize};

/// The closed set of facts a user may ask about (Value Object)
///
/// Each kind is selected by one or more literal keyword phrases.
/// Keywords are stored lowercase and matched against a lowercased question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Population,
    Landmarks,
    University,
}

impl AttributeKind {
    /// All kinds in matching priority order
    pub const PRIORITY: [AttributeKind; 3] = [
        AttributeKind::Population,
        AttributeKind::Landmarks,
        AttributeKind::University,
    ];

    /// Keyword phrases that select this attribute
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            AttributeKind::Population => &["população"],
            AttributeKind::Landmarks => &["pontos turísticos", "atrações"],
            AttributeKind::University => &["universidade"],
        }
    }

    /// Label used when rendering a fact string
    pub fn label(&self) -> &'static str {
        match self {
            AttributeKind::Population => "Population",
            AttributeKind::Landmarks => "Landmarks",
            AttributeKind::University => "University",
        }
    }

    /// Check whether an already-normalized question mentions this attribute
    pub fn is_mentioned_in(&self, normalized: &str) -> bool {
        self.keywords().iter().any(|k| normalized.contains(k))
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}
