//! Error types for the benchmarks crate.

use thiserror::Error;

/// Errors raised while loading or reconciling a benchmark taxonomy.
///
/// Matching itself never fails: a rate that matches nothing is data, not an error.
#[derive(Error, Debug)]
pub enum TaxonomyError {
    /// The snapshot JSON could not be parsed.
    #[error("Invalid taxonomy snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),

    /// Two descriptors share one label.
    #[error("Duplicate benchmark label: {0}")]
    DuplicateBenchmark(String),

    /// A descriptor sits in the wrong partition for its kind.
    #[error("Benchmark '{label}' of kind {kind} cannot be placed in the {partition} partition")]
    PartitionMismatch {
        label: String,
        kind: &'static str,
        partition: &'static str,
    },

    /// A family declares more than one catch-all descriptor.
    #[error("Family '{0}' has more than one catch-all benchmark")]
    MultipleCatchAll(String),

    /// A merge met a benchmark the base taxonomy does not know.
    #[error("Unknown benchmark: {0}")]
    UnknownBenchmark(String),
}

impl TaxonomyError {
    pub fn partition_mismatch(
        label: impl Into<String>,
        kind: &'static str,
        partition: &'static str,
    ) -> Self {
        Self::PartitionMismatch {
            label: label.into(),
            kind,
            partition,
        }
    }
}
