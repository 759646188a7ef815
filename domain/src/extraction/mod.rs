//! Question understanding.
//!
//! - [`extractor::ReferenceExtractor`]: resolves a (city, attribute) pair from a question
//! - [`formatter::FactFormatter`]: renders the resolved fact as a short string

pub mod extractor;
pub mod formatter;
