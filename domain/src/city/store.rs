//! Fact store trait and in-memory implementation

use super::entities::City;
use crate::core::error::DomainError;
use std::collections::HashSet;

/// Read-only source of city facts
///
/// Enumeration order is part of the contract: extraction returns the first
/// city, in this order, whose name appears in the question.
pub trait FactStore: Send + Sync {
    /// All cities in stable enumeration order
    fn cities(&self) -> &[City];

    /// Find a city by name (case-insensitive)
    fn lookup(&self, name: &str) -> Option<&City> {
        let key = name.trim().to_lowercase();
        self.cities().iter().find(|c| c.match_key() == key)
    }

    /// City names in enumeration order
    fn city_names(&self) -> Vec<&str> {
        self.cities().iter().map(|c| c.name.as_str()).collect()
    }
}

/// Fact store backed by a vector, preserving insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryFactStore {
    cities: Vec<City>,
}

impl InMemoryFactStore {
    /// Build a store, rejecting empty names and case-insensitive duplicates
    pub fn new(cities: Vec<City>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for city in &cities {
            let key = city.match_key();
            if key.is_empty() {
                return Err(DomainError::EmptyCityName);
            }
            if !seen.insert(key) {
                return Err(DomainError::DuplicateCity(city.name.clone()));
            }
        }
        Ok(Self { cities })
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl FactStore for InMemoryFactStore {
    fn cities(&self) -> &[City] {
        &self.cities
    }
}
