//! Conversation transcript logging.
//!
//! Provides [`JsonlConversationLogger`], an append-only JSONL writer for the
//! [`ConversationLogger`](cityguide_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
