//! Reference extraction from free-form questions

use crate::city::attribute::AttributeKind;
use crate::city::entities::City;
use crate::city::store::FactStore;
use std::sync::Arc;

/// Outcome of reading a question (transient, not stored)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    /// Both a known city and an attribute keyword were found
    Resolved { city: City, attribute: AttributeKind },
    /// At least one of the two was missing
    Unresolved,
}

impl ExtractionResult {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ExtractionResult::Resolved { .. })
    }
}

/// Turns a question into an [`ExtractionResult`]
///
/// Implementations must be pure: no I/O, no state changes.
pub trait ReferenceExtractor: Send + Sync {
    fn extract(&self, question: &str) -> ExtractionResult;
}

/// Literal substring extractor
///
/// - City: the first name in store order contained in the question wins,
///   even when a longer name also matches.
/// - Attribute: keyword sets are tried in [`AttributeKind::PRIORITY`] order.
///
/// Partial matches are dropped; the result is `Resolved` only when both
/// sides are found.
pub struct KeywordExtractor {
    store: Arc<dyn FactStore>,
}

impl KeywordExtractor {
    pub fn new(store: Arc<dyn FactStore>) -> Self {
        Self { store }
    }

    /// Lowercase and trim, the only normalization applied
    pub fn normalize(question: &str) -> String {
        question.trim().to_lowercase()
    }

    /// First city (in store order) whose name occurs in `normalized`
    pub fn find_city(&self, normalized: &str) -> Option<&City> {
        self.store
            .cities()
            .iter()
            .find(|city| normalized.contains(&city.match_key()))
    }

    /// Highest-priority attribute mentioned in `normalized`
    pub fn find_attribute(normalized: &str) -> Option<AttributeKind> {
        AttributeKind::PRIORITY
            .into_iter()
            .find(|kind| kind.is_mentioned_in(normalized))
    }
}

impl ReferenceExtractor for KeywordExtractor {
    fn extract(&self, question: &str) -> ExtractionResult {
        let normalized = Self::normalize(question);

        match (
            self.find_city(&normalized),
            Self::find_attribute(&normalized),
        ) {
            (Some(city), Some(attribute)) => ExtractionResult::Resolved {
                city: city.clone(),
                attribute,
            },
            _ => ExtractionResult::Unresolved,
        }
    }
}
