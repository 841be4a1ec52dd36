//! sb-core: shared types, IDs, errors, and configuration.
//!
//! This crate is the foundational dependency for the other sproutbook
//! crates, providing the type-safe student identifier, a unified error
//! type, currency rounding, and application configuration.

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

// Re-export the most commonly used items at the crate root.
pub use error::{Error, Result};
pub use ids::StudentId;
pub use money::round_currency;
