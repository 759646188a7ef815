//! Application configuration.
//!
//! - [`AnswerParams`]: controls for a single answer call

mod answer_params;

pub use answer_params::AnswerParams;
