//! FIRDS Core - classification and aggregation of debt reference data.
//!
//! This crate turns a stream of debt security records into per-benchmark
//! statistics for a reporting period. Record extraction, file retrieval and
//! report writing live outside this crate; it only consumes
//! [`SecurityRecord`]s and produces a consolidated [`Tracker`].
//!
//! - **Securities** (`securities`) - The record model handed over by extraction
//! - **Tracker** (`tracker`) - Per-worker classification state machine
//! - **Aggregation** (`aggregation`) - Merging of worker trackers and taxonomies
//! - **Batch** (`batch`) - Parallel per-file workers and reporting periods

pub mod aggregation;
pub mod batch;
pub mod constants;
pub mod errors;
pub mod securities;
pub mod tracker;

pub use aggregation::{aggregate_trackers, merge_mismatch_logs, merge_taxonomies};
pub use batch::{BatchOutcome, BatchRunner, BatchSettings, InMemorySource, RecordSource};
pub use securities::SecurityRecord;
pub use tracker::{Classification, ClassificationContext, Tracker};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
