//! Chat payload domain.
//!
//! - [`entities::Message`]: a single role-tagged chat message
//! - [`entities::build_chat_messages`]: flattens system prompt, history and new message

pub mod entities;
