//! Reconciliation of independent worker results.

mod aggregator;

pub use aggregator::{aggregate_trackers, merge_mismatch_logs, merge_taxonomies};
