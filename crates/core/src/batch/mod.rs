//! Batch orchestration for one reporting period.
//!
//! ```text
//! sources (one per file) ──► worker 1: taxonomy copy + Tracker ─┐
//!                        ──► worker 2: taxonomy copy + Tracker ─┼─► Aggregator ─► BatchOutcome
//!                        ──► worker N: taxonomy copy + Tracker ─┘
//! ```
//!
//! Workers share nothing mutable. Each owns a deep copy of the taxonomy, so
//! learned names stay local until the aggregator unions them. The batch waits
//! for every worker and fails as a whole if any worker fails.

mod batch_model;
mod batch_service;
mod batch_traits;
mod periods;

pub use batch_model::{BatchOutcome, BatchSettings, SourceSummary};
pub use batch_service::BatchRunner;
pub use batch_traits::{InMemorySource, RecordSource};
pub use periods::{ensure_single_publication, iter_periods, ReportingPeriod};
