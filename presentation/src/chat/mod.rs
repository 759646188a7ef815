//! Interactive chat module
//!
//! Provides a line-editor based chat session over one conversation.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
