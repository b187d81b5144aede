//! Benchmark data models
//!
//! - `types` - Type aliases for common identifiers (Currency, Isin)
//! - `rate` - Interest-rate description of a security (RateDescriptor, FloatingRate, Term)

mod rate;
mod types;

pub use rate::{FloatingRate, IdentifierKind, RateDescriptor, Term};
pub use types::{Currency, Isin};
