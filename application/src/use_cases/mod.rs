//! Application use cases.

pub mod answer_question;
