//! Conversation memory for a single session.
//!
//! - [`turn::Turn`]: one recorded (question, answer) exchange
//! - [`history::DialogueHistory`]: ordered turns replayed as generation context

pub mod history;
pub mod turn;
