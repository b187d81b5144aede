//! FIRDS Benchmarks Crate
//!
//! Reference data and matching rules for classifying floating interest-rate
//! securities against a taxonomy of benchmark rates.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +---------------------+
//! |  RateDescriptor  | --> |  BenchmarkResolver  |  (priority-ordered scan)
//! +------------------+     +---------------------+
//!                                  |
//!                    +-------------+-------------+
//!                    v                           v
//!          +------------------+        +------------------+
//!          | generic families |        |    specific      |
//!          | (GBP/USD/.. LIBOR|        | (EURIBOR, SONIA, |
//!          |  then catch-all) |        |  SOFR, ...)      |
//!          +------------------+        +------------------+
//!                    \                           /
//!                     +---------> Matcher <-----+
//!                          code / isin / name / root name
//! ```
//!
//! # Core Types
//!
//! - [`RateDescriptor`] - Fixed or floating interest-rate description of a security
//! - [`BenchmarkDescriptor`] - One benchmark's code, ISINs, names and root-name patterns
//! - [`BenchmarkTaxonomy`] - Generic-family and specific descriptors in priority order
//! - [`MatchKind`] - Which rule produced a match
//! - [`Resolution`] - Benchmark picked for a floating rate
//! - [`CurrencyMismatchLog`] - Advisory log of benchmark/security currency disagreements

pub mod errors;
pub mod matcher;
pub mod models;
pub mod resolver;
pub mod taxonomy;

pub use errors::TaxonomyError;
pub use matcher::{evaluate, match_benchmark, tokenize, MatchKind};
pub use models::{Currency, FloatingRate, IdentifierKind, Isin, RateDescriptor, Term};
pub use resolver::{resolve_benchmark, CurrencyMismatch, CurrencyMismatchLog, Resolution};
pub use taxonomy::{
    default_taxonomy, BenchmarkDescriptor, BenchmarkTaxonomy, DescriptorKind, TaxonomySnapshot,
};
