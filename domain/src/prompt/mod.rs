//! Prompt domain
//!
//! Fixed texts used when talking to the generator and to the user.

mod template;

pub use template::PromptTemplate;
