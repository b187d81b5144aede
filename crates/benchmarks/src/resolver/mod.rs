//! Benchmark resolution for floating rates.
//!
//! The resolver scans the taxonomy in priority order:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ 1. Generic families, declared order                       │
//! │    - currency members (no bare-code matches)              │
//! │    - catch-all last (code allowed, currency from security)│
//! └──────────────────────────────────────────────────────────┘
//!                           │ miss
//!                           ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │ 2. Specific benchmarks, declared order, first match wins, │
//! │    no bare-code matches                                   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! A resolved benchmark whose currency differs from the security's is
//! recorded in a [`CurrencyMismatchLog`]; it never fails resolution.

mod benchmark_resolver;
mod currency_mismatch;

pub use benchmark_resolver::{resolve_benchmark, Resolution};
pub use currency_mismatch::{CurrencyMismatch, CurrencyMismatchLog};
