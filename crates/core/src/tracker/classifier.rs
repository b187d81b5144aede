use chrono::{DateTime, Utc};
use firds_benchmarks::{
    resolve_benchmark, BenchmarkTaxonomy, CurrencyMismatchLog, RateDescriptor, Resolution,
};
use log::{debug, warn};

use super::tracker_model::Tracker;
use crate::errors::{Error, Result};
use crate::securities::SecurityRecord;

/// Outcome of classifying one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Delisted,
    Duplicate,
    Matured,
    ZeroNominal,
    Fixed,
    /// Floating rate, with the benchmark it resolved to if any.
    Floating(Option<Resolution>),
}

/// Worker-owned state the classifier reads and grows.
pub struct ClassificationContext<'a> {
    pub taxonomy: &'a mut BenchmarkTaxonomy,
    pub mismatches: &'a mut CurrencyMismatchLog,
    pub assessment_date: DateTime<Utc>,
    pub convert_legacy_currencies: bool,
}

impl Tracker {
    /// Classifies `record` and updates exactly one counter or aggregate.
    ///
    /// The adjacent-duplicate check compares against the previous record that
    /// got past the delisting check, so only consecutive repeats are caught.
    pub fn update(
        &mut self,
        record: &SecurityRecord,
        ctx: &mut ClassificationContext<'_>,
    ) -> Result<Classification> {
        if record.is_delisted(ctx.assessment_date) {
            self.delisted += 1;
            return Ok(Classification::Delisted);
        }

        if self.last_isin.as_deref() == Some(record.isin.as_str()) {
            self.duplicates += 1;
            return Ok(Classification::Duplicate);
        }
        self.last_isin = Some(record.isin.clone());

        let maturity = record.maturity(ctx.assessment_date);
        if maturity < chrono::TimeDelta::zero() {
            self.matured += 1;
            return Ok(Classification::Matured);
        }

        if record.nominal_amount.is_zero() {
            self.zero_nominal += 1;
            return Ok(Classification::ZeroNominal);
        }

        let rate = match &record.interest_rate {
            RateDescriptor::Fixed { .. } => {
                self.fixed += 1;
                return Ok(Classification::Fixed);
            }
            RateDescriptor::Floating(rate) => rate,
            RateDescriptor::Unrecognized { tag } => {
                warn!("Record {} has unexpected interest rate '{}'", record.isin, tag);
                return Err(Error::malformed_record(record.isin.as_str(), tag.as_str()));
            }
        };

        self.floating += 1;
        let currency = record.effective_currency(ctx.convert_legacy_currencies);
        let isin = Some(record.isin.as_str()).filter(|isin| !isin.is_empty());
        let resolution = resolve_benchmark(ctx.taxonomy, rate, currency, isin, ctx.mismatches);

        match &resolution {
            Some(resolved) => {
                debug!(
                    "{} -> {} by {}",
                    record.isin,
                    resolved.benchmark,
                    resolved.match_kind.as_str()
                );
                self.benchmarks
                    .entry(resolved.benchmark.clone())
                    .or_default()
                    .record(maturity, record.nominal_amount);
            }
            None => {
                for (kind, identifier) in rate.identifiers() {
                    debug!(
                        "{} unresolved ({} '{}')",
                        record.isin,
                        kind.as_str(),
                        identifier
                    );
                    self.uncategorized.tally(kind, identifier);
                }
            }
        }

        Ok(Classification::Floating(resolution))
    }
}
