pub mod conversation_logger;
pub mod progress;
pub mod response_generator;
