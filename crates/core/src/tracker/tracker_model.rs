use std::collections::BTreeMap;

use chrono::TimeDelta;
use firds_benchmarks::{BenchmarkTaxonomy, IdentifierKind, Isin};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::duration_to_years;

/// Running totals for one benchmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkAggregate {
    pub count: u64,
    /// Sum of time-to-maturity over all counted securities.
    pub summed_maturity: TimeDelta,
    pub summed_nominal: Decimal,
}

impl Default for BenchmarkAggregate {
    fn default() -> Self {
        Self {
            count: 0,
            summed_maturity: TimeDelta::zero(),
            summed_nominal: Decimal::ZERO,
        }
    }
}

impl BenchmarkAggregate {
    pub fn record(&mut self, maturity: TimeDelta, nominal: Decimal) {
        self.count += 1;
        self.summed_maturity += maturity;
        self.summed_nominal += nominal;
    }

    pub fn merge(&mut self, other: &BenchmarkAggregate) {
        self.count += other.count;
        self.summed_maturity += other.summed_maturity;
        self.summed_nominal += other.summed_nominal;
    }

    /// Mean time-to-maturity in years, `None` when nothing was counted.
    pub fn mean_maturity_years(&self) -> Option<f64> {
        (self.count > 0).then(|| duration_to_years(self.summed_maturity) / self.count as f64)
    }
}

/// Floating rates that matched no benchmark, tallied by the raw identifier
/// they carried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UncategorizedBuckets {
    pub index_name: BTreeMap<String, u64>,
    pub index_code: BTreeMap<String, u64>,
    pub index_isin: BTreeMap<String, u64>,
}

impl UncategorizedBuckets {
    pub fn bucket(&self, kind: IdentifierKind) -> &BTreeMap<String, u64> {
        match kind {
            IdentifierKind::Name => &self.index_name,
            IdentifierKind::Code => &self.index_code,
            IdentifierKind::Isin => &self.index_isin,
        }
    }

    fn bucket_mut(&mut self, kind: IdentifierKind) -> &mut BTreeMap<String, u64> {
        match kind {
            IdentifierKind::Name => &mut self.index_name,
            IdentifierKind::Code => &mut self.index_code,
            IdentifierKind::Isin => &mut self.index_isin,
        }
    }

    pub fn tally(&mut self, kind: IdentifierKind, identifier: &str) {
        *self
            .bucket_mut(kind)
            .entry(identifier.to_string())
            .or_insert(0) += 1;
    }

    pub fn count(&self, kind: IdentifierKind, identifier: &str) -> u64 {
        self.bucket(kind).get(identifier).copied().unwrap_or(0)
    }

    /// Unions `other` into these buckets.
    ///
    /// An identifier present on both sides keeps `other`'s count; counts are
    /// not summed. Two workers that each meet the same unknown identifier
    /// therefore report only the later worker's count.
    pub fn union(&mut self, other: &UncategorizedBuckets) {
        for kind in [IdentifierKind::Name, IdentifierKind::Code, IdentifierKind::Isin] {
            self.bucket_mut(kind).extend(
                other
                    .bucket(kind)
                    .iter()
                    .map(|(identifier, count)| (identifier.clone(), *count)),
            );
        }
    }

    /// Sum of all tallies across buckets.
    pub fn total(&self) -> u64 {
        self.index_name.values().sum::<u64>()
            + self.index_code.values().sum::<u64>()
            + self.index_isin.values().sum::<u64>()
    }

    pub fn is_empty(&self) -> bool {
        self.index_name.is_empty() && self.index_code.is_empty() && self.index_isin.is_empty()
    }
}

/// Classification outcomes accumulated by one worker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracker {
    pub floating: u64,
    pub fixed: u64,
    pub duplicates: u64,
    pub matured: u64,
    pub delisted: u64,
    pub zero_nominal: u64,
    pub benchmarks: BTreeMap<String, BenchmarkAggregate>,
    pub uncategorized: UncategorizedBuckets,
    /// ISIN of the last record that passed the delisting check.
    pub(crate) last_isin: Option<Isin>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tracker with a zero aggregate for every label of `taxonomy`.
    pub fn for_taxonomy(taxonomy: &BenchmarkTaxonomy) -> Self {
        Self {
            benchmarks: taxonomy
                .benchmark_labels()
                .into_iter()
                .map(|label| (label, BenchmarkAggregate::default()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn benchmark(&self, label: &str) -> Option<&BenchmarkAggregate> {
        self.benchmarks.get(label)
    }

    pub fn last_isin(&self) -> Option<&str> {
        self.last_isin.as_deref()
    }

    /// Number of records classified so far.
    pub fn total(&self) -> u64 {
        self.floating + self.fixed + self.duplicates + self.matured + self.delisted + self.zero_nominal
    }

    /// Adds `other`'s counters and aggregates into this tracker and unions
    /// its uncategorized buckets. The duplicate sentinel is left untouched.
    pub fn merge(&mut self, other: &Tracker) {
        self.floating += other.floating;
        self.fixed += other.fixed;
        self.duplicates += other.duplicates;
        self.matured += other.matured;
        self.delisted += other.delisted;
        self.zero_nominal += other.zero_nominal;

        for (label, aggregate) in &other.benchmarks {
            self.benchmarks
                .entry(label.clone())
                .or_default()
                .merge(aggregate);
        }

        self.uncategorized.union(&other.uncategorized);
    }

    /// Per-benchmark rows: taxonomy labels first in their reporting order,
    /// then labels only seen at run time (e.g. "AUD LIBOR") alphabetically.
    pub fn benchmark_summaries(&self, taxonomy: &BenchmarkTaxonomy) -> Vec<BenchmarkSummary> {
        let known = taxonomy.benchmark_labels();
        let extra = self
            .benchmarks
            .keys()
            .filter(|label| !known.contains(label))
            .cloned()
            .collect::<Vec<_>>();

        known
            .into_iter()
            .chain(extra)
            .map(|label| {
                let aggregate = self.benchmarks.get(&label).cloned().unwrap_or_default();
                BenchmarkSummary {
                    replacement: taxonomy.replacement_for(&label).map(str::to_string),
                    count: aggregate.count,
                    mean_maturity_years: aggregate.mean_maturity_years(),
                    summed_nominal: aggregate.summed_nominal,
                    label,
                }
            })
            .collect()
    }

    /// Serializable view for the reporting layer.
    pub fn report(&self, taxonomy: &BenchmarkTaxonomy) -> TrackerReport {
        TrackerReport {
            floating: self.floating,
            fixed: self.fixed,
            duplicates: self.duplicates,
            matured: self.matured,
            delisted: self.delisted,
            zero_nominal: self.zero_nominal,
            benchmarks: self.benchmark_summaries(taxonomy),
            uncategorized: self.uncategorized.clone(),
        }
    }
}

/// One reporting row per benchmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkSummary {
    pub label: String,
    pub count: u64,
    pub mean_maturity_years: Option<f64>,
    pub summed_nominal: Decimal,
    /// Successor benchmark, if this one is being replaced.
    pub replacement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerReport {
    pub floating: u64,
    pub fixed: u64,
    pub duplicates: u64,
    pub matured: u64,
    pub delisted: u64,
    pub zero_nominal: u64,
    pub benchmarks: Vec<BenchmarkSummary>,
    pub uncategorized: UncategorizedBuckets,
}

#[cfg(test)]
mod tests {
    use super::*;
    use firds_benchmarks::taxonomy::default_taxonomy;
    use rust_decimal_macros::dec;

    #[test]
    fn test_for_taxonomy_seeds_all_labels() {
        let taxonomy = default_taxonomy();
        let tracker = Tracker::for_taxonomy(&taxonomy);
        assert_eq!(tracker.benchmarks.len(), taxonomy.benchmark_labels().len());
        assert_eq!(tracker.benchmark("SONIA"), Some(&BenchmarkAggregate::default()));
        assert_eq!(tracker.total(), 0);
    }

    #[test]
    fn test_aggregate_record_and_mean() {
        let mut aggregate = BenchmarkAggregate::default();
        assert_eq!(aggregate.mean_maturity_years(), None);

        aggregate.record(TimeDelta::days(365) + TimeDelta::hours(6), dec!(100));
        aggregate.record(TimeDelta::days(3 * 365) + TimeDelta::hours(18), dec!(50.5));

        assert_eq!(aggregate.count, 2);
        assert_eq!(aggregate.summed_nominal, dec!(150.5));
        let mean = aggregate.mean_maturity_years().unwrap();
        assert!((mean - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_buckets_tally_and_total() {
        let mut buckets = UncategorizedBuckets::default();
        buckets.tally(IdentifierKind::Name, "BBSW");
        buckets.tally(IdentifierKind::Name, "BBSW");
        buckets.tally(IdentifierKind::Isin, "AU000000BBSW");

        assert_eq!(buckets.count(IdentifierKind::Name, "BBSW"), 2);
        assert_eq!(buckets.count(IdentifierKind::Code, "BBSW"), 0);
        assert_eq!(buckets.total(), 3);
    }

    #[test]
    fn test_union_keeps_later_count() {
        let mut left = UncategorizedBuckets::default();
        left.tally(IdentifierKind::Name, "BBSW");
        left.tally(IdentifierKind::Name, "BBSW");
        left.tally(IdentifierKind::Code, "CDOR");

        let mut right = UncategorizedBuckets::default();
        right.tally(IdentifierKind::Name, "BBSW");

        left.union(&right);

        assert_eq!(left.count(IdentifierKind::Name, "BBSW"), 1);
        assert_eq!(left.count(IdentifierKind::Code, "CDOR"), 1);
    }

    #[test]
    fn test_summaries_include_runtime_labels() {
        let taxonomy = default_taxonomy();
        let mut tracker = Tracker::for_taxonomy(&taxonomy);
        tracker
            .benchmarks
            .entry("AUD LIBOR".to_string())
            .or_default()
            .record(TimeDelta::days(730) + TimeDelta::hours(12), dec!(10));

        let rows = tracker.benchmark_summaries(&taxonomy);
        assert_eq!(rows.len(), taxonomy.benchmark_labels().len() + 1);
        assert_eq!(rows[0].label, "GBP LIBOR");
        assert_eq!(rows[0].replacement.as_deref(), Some("SONIA"));
        assert_eq!(rows[0].mean_maturity_years, None);

        let last = rows.last().unwrap();
        assert_eq!(last.label, "AUD LIBOR");
        assert_eq!(last.count, 1);
        assert!((last.mean_maturity_years.unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_report_serializes() {
        let taxonomy = default_taxonomy();
        let mut tracker = Tracker::for_taxonomy(&taxonomy);
        tracker.fixed = 3;
        let json = serde_json::to_value(tracker.report(&taxonomy)).unwrap();
        assert_eq!(json["fixed"], 3);
        assert_eq!(json["zeroNominal"], 0);
        assert!(json["benchmarks"].as_array().unwrap().len() >= 13);
    }
}
