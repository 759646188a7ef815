//! Fact table loading
//!
//! The city facts ship as an embedded TOML document ([`TomlFactTable::builtin`])
//! and can be replaced by a user-supplied file with the same layout:
//!
//! ```toml
//! [[city]]
//! name = "Natal"
//! population = "1,4 milhões"
//! landmarks = ["Forte dos Reis Magos", "Praia de Ponta Negra"]
//! university = "Universidade Federal do Rio Grande do Norte (UFRN)"
//! ```
//!
//! Table order is preserved; it decides which city wins when a question
//! mentions several.

mod table;

pub use table::{FactTableError, TomlFactTable};
