//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("City name cannot be empty")]
    EmptyCityName,

    #[error("Duplicate city in fact table: {0}")]
    DuplicateCity(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_city_display() {
        let error = DomainError::DuplicateCity("Natal".to_string());
        assert_eq!(error.to_string(), "Duplicate city in fact table: Natal");
    }

    #[test]
    fn test_empty_name_display() {
        assert_eq!(
            DomainError::EmptyCityName.to_string(),
            "City name cannot be empty"
        );
    }
}
