//! Per-worker classification state.
//!
//! A [`Tracker`] folds a stream of [`SecurityRecord`](crate::securities::SecurityRecord)s
//! into counters and per-benchmark aggregates. Records go through an ordered,
//! short-circuiting classification:
//!
//! ```text
//! delisted -> duplicate (adjacent ISIN) -> matured -> zero nominal -> fixed | floating
//!                                                                             |
//!                                                  benchmark aggregate <- resolved
//!                                                  uncategorized bucket <- unresolved
//! ```

mod classifier;
mod tracker_model;

pub use classifier::{Classification, ClassificationContext};
pub use tracker_model::{
    BenchmarkAggregate, BenchmarkSummary, Tracker, TrackerReport, UncategorizedBuckets,
};
