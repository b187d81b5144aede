//! Property-based tests for tracker classification and aggregation.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use firds_benchmarks::{
    default_taxonomy, BenchmarkTaxonomy, CurrencyMismatchLog, FloatingRate, IdentifierKind,
    MatchKind, RateDescriptor,
};
use firds_core::tracker::{BenchmarkAggregate, Classification, ClassificationContext, Tracker};
use firds_core::{aggregate_trackers, SecurityRecord};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

const LABELS: &[&str] = &["GBP LIBOR", "EURIBOR", "SONIA", "SOFR", "AUD LIBOR"];

fn assessment_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
}

fn arb_aggregate() -> impl Strategy<Value = BenchmarkAggregate> {
    (0u64..500, -5_000i64..20_000, 0i64..1_000_000_000).prop_map(|(count, days, cents)| {
        BenchmarkAggregate {
            count,
            summed_maturity: TimeDelta::days(days),
            summed_nominal: Decimal::new(cents, 2),
        }
    })
}

fn arb_tracker() -> impl Strategy<Value = Tracker> {
    (
        proptest::collection::vec(0u64..10_000, 6),
        proptest::collection::btree_map(
            proptest::sample::select(LABELS).prop_map(str::to_string),
            arb_aggregate(),
            0..LABELS.len(),
        ),
        proptest::collection::vec(("[A-Z]{3,6}", 1u64..5), 0..5),
    )
        .prop_map(|(counters, benchmarks, unknown)| {
            let mut tracker = Tracker::new();
            tracker.floating = counters[0];
            tracker.fixed = counters[1];
            tracker.duplicates = counters[2];
            tracker.matured = counters[3];
            tracker.delisted = counters[4];
            tracker.zero_nominal = counters[5];
            tracker.benchmarks = benchmarks;
            for (identifier, times) in unknown {
                for _ in 0..times {
                    tracker.uncategorized.tally(IdentifierKind::Name, &identifier);
                }
            }
            tracker
        })
}

/// Counters plus benchmark aggregates; everything that must sum exactly.
fn summed_fields(tracker: &Tracker) -> ([u64; 6], BTreeMap<String, BenchmarkAggregate>) {
    (
        [
            tracker.floating,
            tracker.fixed,
            tracker.duplicates,
            tracker.matured,
            tracker.delisted,
            tracker.zero_nominal,
        ],
        tracker.benchmarks.clone(),
    )
}

fn record(isin: String, days_to_maturity: i64, cents: i64, rate: RateDescriptor) -> SecurityRecord {
    SecurityRecord {
        isin,
        currency: "GBP".to_string(),
        nominal_amount: Decimal::new(cents, 2),
        maturity_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
            + TimeDelta::days(days_to_maturity),
        first_trade_date: None,
        termination_date: None,
        interest_rate: rate,
    }
}

fn classify(
    tracker: &mut Tracker,
    taxonomy: &mut BenchmarkTaxonomy,
    record: &SecurityRecord,
) -> Classification {
    let mut mismatches = CurrencyMismatchLog::new();
    let mut ctx = ClassificationContext {
        taxonomy,
        mismatches: &mut mismatches,
        assessment_date: assessment_date(),
        convert_legacy_currencies: true,
    };
    tracker.update(record, &mut ctx).unwrap()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Merging is order-independent for counters and benchmark aggregates.
    #[test]
    fn prop_merge_is_commutative_for_sums(
        trackers in proptest::collection::vec(arb_tracker(), 1..6)
    ) {
        let forward = aggregate_trackers(trackers.iter());
        let backward = aggregate_trackers(trackers.iter().rev());

        prop_assert_eq!(summed_fields(&forward), summed_fields(&backward));
    }

    /// Grouping of merges does not change counters and benchmark aggregates.
    #[test]
    fn prop_merge_is_associative_for_sums(
        a in arb_tracker(),
        b in arb_tracker(),
        c in arb_tracker(),
    ) {
        let left = aggregate_trackers([&aggregate_trackers([&a, &b]), &c]);
        let right = aggregate_trackers([&a, &aggregate_trackers([&b, &c])]);

        prop_assert_eq!(summed_fields(&left), summed_fields(&right));
    }

    /// The uncategorized union never exceeds the sum of worker tallies, and
    /// falls short of it exactly when workers share an identifier.
    #[test]
    fn prop_uncategorized_union_is_not_a_sum(
        a in arb_tracker(),
        b in arb_tracker(),
    ) {
        let merged = aggregate_trackers([&a, &b]);
        let summed = a.uncategorized.total() + b.uncategorized.total();
        let shared = a
            .uncategorized
            .index_name
            .keys()
            .any(|k| b.uncategorized.index_name.contains_key(k));

        prop_assert!(merged.uncategorized.total() <= summed);
        prop_assert_eq!(merged.uncategorized.total() < summed, shared);
    }

    /// Every live fixed-rate record adds exactly one to `fixed` and leaves
    /// benchmark aggregates alone.
    #[test]
    fn prop_fixed_records_count_once(
        records in proptest::collection::vec((1i64..10_000, 1i64..1_000_000_000), 1..40)
    ) {
        let mut taxonomy = default_taxonomy();
        let mut tracker = Tracker::for_taxonomy(&taxonomy);
        let before = tracker.benchmarks.clone();

        for (i, (days, cents)) in records.iter().enumerate() {
            let r = record(
                format!("XS{:010}", i),
                *days,
                *cents,
                RateDescriptor::Fixed { rate: None },
            );
            prop_assert_eq!(classify(&mut tracker, &mut taxonomy, &r), Classification::Fixed);
            prop_assert_eq!(tracker.fixed, i as u64 + 1);
        }

        prop_assert_eq!(&tracker.benchmarks, &before);
        prop_assert_eq!(tracker.total(), records.len() as u64);
    }

    /// Resolved floating records add their exact maturity and nominal.
    #[test]
    fn prop_resolved_floating_sums_exactly(
        records in proptest::collection::vec((0i64..10_000, 1i64..1_000_000_000), 1..40)
    ) {
        let mut taxonomy = default_taxonomy();
        let mut tracker = Tracker::for_taxonomy(&taxonomy);
        let mut expected = BenchmarkAggregate::default();

        for (i, (days, cents)) in records.iter().enumerate() {
            let r = record(
                format!("XS{:010}", i),
                *days,
                *cents,
                RateDescriptor::Floating(FloatingRate::named("SONIA")),
            );
            classify(&mut tracker, &mut taxonomy, &r);
            expected.record(r.maturity(assessment_date()), r.nominal_amount);
        }

        prop_assert_eq!(tracker.benchmark("SONIA"), Some(&expected));
        prop_assert_eq!(tracker.floating, records.len() as u64);
    }

    /// A name learned by root-name matching resolves by name from then on.
    #[test]
    fn prop_learned_names_resolve_by_name(
        suffix in "[0-9]{1,2}[A-Z]{1,4}",
        repeats in 1usize..5,
    ) {
        let mut taxonomy = default_taxonomy();
        let mut tracker = Tracker::for_taxonomy(&taxonomy);
        let name = format!("EURIBOR {}", suffix);

        let kinds: Vec<MatchKind> = (0..=repeats)
            .map(|i| {
                let r = record(
                    format!("XS{:010}", i),
                    365,
                    100,
                    RateDescriptor::Floating(FloatingRate::named(name.clone())),
                );
                match classify(&mut tracker, &mut taxonomy, &r) {
                    Classification::Floating(Some(resolution)) => resolution.match_kind,
                    other => panic!("Expected resolved floating rate, got {:?}", other),
                }
            })
            .collect();

        prop_assert_eq!(kinds[0], MatchKind::RootName);
        prop_assert!(kinds[1..].iter().all(|k| *k == MatchKind::Name));
        prop_assert!(taxonomy.get("EURIBOR").unwrap().names().contains(&name));
    }

    /// Zero-nominal records never reach benchmark resolution.
    #[test]
    fn prop_zero_nominal_short_circuits(
        fixed_rate in any::<bool>(),
        days in 0i64..10_000,
    ) {
        let mut taxonomy = default_taxonomy();
        let mut tracker = Tracker::for_taxonomy(&taxonomy);
        let names_before = taxonomy.name_count();
        let rate = if fixed_rate {
            RateDescriptor::Fixed { rate: None }
        } else {
            RateDescriptor::Floating(FloatingRate::named("SOME NEW EURIBOR VARIANT"))
        };

        let r = record("XS0000000001".to_string(), days, 0, rate);
        prop_assert_eq!(classify(&mut tracker, &mut taxonomy, &r), Classification::ZeroNominal);
        prop_assert_eq!(tracker.zero_nominal, 1);
        prop_assert_eq!(taxonomy.name_count(), names_before);
    }
}
