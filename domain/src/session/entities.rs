//! Chat message entities

use crate::conversation::turn::Turn;
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message in a conversation (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Lay out a chat request: system, then each turn as user/assistant, then the new message.
///
/// Turns are emitted in the order given; callers pass history snapshots
/// unchanged so the backend sees the conversation as it happened.
pub fn build_chat_messages(system_prompt: &str, history: &[Turn], message: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() * 2 + 2);
    messages.push(Message::system(system_prompt));
    for turn in history {
        messages.push(Message::user(&turn.user));
        messages.push(Message::assistant(&turn.assistant));
    }
    messages.push(Message::user(message));
    messages
}
