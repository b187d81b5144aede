//! Combines per-worker trackers, taxonomies and mismatch logs.
//!
//! Counters and benchmark aggregates are plain sums, so the merge order does
//! not affect them. Uncategorized buckets are unioned rather than summed;
//! see [`UncategorizedBuckets::union`](crate::tracker::UncategorizedBuckets::union).

use firds_benchmarks::{BenchmarkTaxonomy, CurrencyMismatchLog};
use log::info;

use crate::errors::Result;
use crate::tracker::Tracker;

/// Folds `trackers` into a single tracker, in iteration order.
pub fn aggregate_trackers<'a, I>(trackers: I) -> Tracker
where
    I: IntoIterator<Item = &'a Tracker>,
{
    trackers.into_iter().fold(Tracker::new(), |mut acc, tracker| {
        acc.merge(tracker);
        acc
    })
}

/// Unions the learned names of every copy into a copy of `base`.
pub fn merge_taxonomies<'a, I>(base: &BenchmarkTaxonomy, copies: I) -> Result<BenchmarkTaxonomy>
where
    I: IntoIterator<Item = &'a BenchmarkTaxonomy>,
{
    let mut merged = base.clone();
    let before = merged.name_count();
    for copy in copies {
        merged.merge_learned_names(copy)?;
    }
    info!(
        "Merged taxonomies: {} learned names added",
        merged.name_count() - before
    );
    Ok(merged)
}

pub fn merge_mismatch_logs<'a, I>(logs: I) -> CurrencyMismatchLog
where
    I: IntoIterator<Item = &'a CurrencyMismatchLog>,
{
    logs.into_iter()
        .fold(CurrencyMismatchLog::new(), |mut acc, log| {
            acc.merge(log);
            acc
        })
}
