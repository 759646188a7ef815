//! City facts domain.
//!
//! - [`entities::City`]: a city and its answerable attributes
//! - [`attribute::AttributeKind`]: the closed set of attributes a user may ask about
//! - [`store::FactStore`]: read-only, ordered lookup of cities

pub mod attribute;
pub mod entities;
pub mod store;
