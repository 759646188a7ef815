//! Response Generator port
//!
//! Defines the interface for the external text-completion service.

use async_trait::async_trait;
use cityguide_domain::Turn;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while generating a response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request rejected (status {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Empty completion")]
    EmptyCompletion,

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

impl GenerationError {
    /// Check if the backend refused the credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(self, GenerationError::Rejected { status: 401 | 403, .. })
    }
}

/// Text generation backend
///
/// This port defines how the application layer obtains a reply.
/// Implementations (adapters) live in the infrastructure layer.
///
/// `history` must reach the backend in exactly the order given.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Identifier of the underlying model, for logs
    fn model(&self) -> &str;

    /// Generate a reply to `message` given the system instruction and prior turns
    async fn generate(
        &self,
        system_prompt: &str,
        history: &[Turn],
        message: &str,
    ) -> Result<String, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display() {
        let error = GenerationError::Rejected {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Request rejected (status 429): rate limited"
        );
    }

    #[test]
    fn test_is_auth_error() {
        let unauthorized = GenerationError::Rejected {
            status: 401,
            message: String::new(),
        };
        assert!(unauthorized.is_auth_error());
        assert!(!GenerationError::EmptyCompletion.is_auth_error());
    }
}
