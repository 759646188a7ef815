//! Domain layer for city-guide
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Facts
//!
//! A [`City`] carries three answerable attributes ([`AttributeKind`]):
//! population, landmarks and university. Cities live in a read-only
//! [`FactStore`] whose enumeration order is meaningful.
//!
//! ## Extraction
//!
//! A [`ReferenceExtractor`] turns a free-form question into an
//! [`ExtractionResult`]: either a resolved (city, attribute) pair or
//! `Unresolved`. The default [`KeywordExtractor`] does literal,
//! first-match-wins substring matching.
//!
//! ## Dialogue
//!
//! Successful exchanges are recorded as [`Turn`]s in a per-session
//! [`DialogueHistory`], which is replayed as context on every generation
//! request.

pub mod city;
pub mod config;
pub mod conversation;
pub mod core;
pub mod extraction;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use city::{
    attribute::AttributeKind,
    entities::City,
    store::{FactStore, InMemoryFactStore},
};
pub use config::{ConfigIssue, OutputFormat, Severity};
pub use conversation::{history::DialogueHistory, turn::Turn};
pub use core::error::DomainError;
pub use extraction::{
    extractor::{ExtractionResult, KeywordExtractor, ReferenceExtractor},
    formatter::FactFormatter,
};
pub use prompt::PromptTemplate;
pub use session::entities::{Message, Role, build_chat_messages};
