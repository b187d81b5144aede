use chrono::{DateTime, NaiveDate, Utc};
use firds_benchmarks::{BenchmarkTaxonomy, CurrencyMismatchLog};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::tracker::{Tracker, TrackerReport};

/// Settings for a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchSettings {
    /// Date against which maturity and delisting are assessed (default: now,
    /// captured once when the batch starts)
    pub assessment_date: Option<DateTime<Utc>>,

    /// Upper bound on parallel workers (default: one per source)
    pub max_workers: Option<usize>,

    /// Report legacy currencies under their successor, e.g. DEM as EUR (default: true)
    pub convert_legacy_currencies: bool,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            assessment_date: None,
            max_workers: None,
            convert_legacy_currencies: true,
        }
    }
}

impl BatchSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: BatchSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_workers == Some(0) {
            return Err(Error::InvalidSettings(
                "maxWorkers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_assessment_date(mut self, assessment_date: DateTime<Utc>) -> Self {
        self.assessment_date = Some(assessment_date);
        self
    }
}

/// What one worker hands back after draining its source.
#[derive(Debug, Clone)]
pub(crate) struct WorkerOutput {
    pub source: SourceSummary,
    pub tracker: Tracker,
    pub taxonomy: BenchmarkTaxonomy,
    pub mismatches: CurrencyMismatchLog,
}

/// Records drained from one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSummary {
    pub name: String,
    pub records: u64,
}

/// Consolidated result of a batch.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub assessment_date: DateTime<Utc>,
    /// Shared publication date of the sources, when they declare one.
    pub publication_date: Option<NaiveDate>,
    /// One entry per source, in input order.
    pub sources: Vec<SourceSummary>,
    pub tracker: Tracker,
    /// Input taxonomy grown by every worker's learned names.
    pub taxonomy: BenchmarkTaxonomy,
    pub mismatches: CurrencyMismatchLog,
}

impl BatchOutcome {
    pub fn report(&self) -> TrackerReport {
        self.tracker.report(&self.taxonomy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_settings() {
        let settings = BatchSettings::default();
        assert!(settings.convert_legacy_currencies);
        assert_eq!(settings.max_workers, None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_from_json() {
        let settings = BatchSettings::from_json(
            r#"{"assessmentDate": "2020-05-31T00:00:00Z", "maxWorkers": 4}"#,
        )
        .unwrap();
        assert_eq!(
            settings.assessment_date,
            Some(Utc.with_ymd_and_hms(2020, 5, 31, 0, 0, 0).unwrap())
        );
        assert_eq!(settings.max_workers, Some(4));
        assert!(settings.convert_legacy_currencies);
    }

    #[test]
    fn test_zero_workers_rejected() {
        let err = BatchSettings::from_json(r#"{"maxWorkers": 0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidSettings(_)));
    }

    #[test]
    fn test_malformed_settings_json() {
        let err = BatchSettings::from_json(r#"{"maxWorkers": "many"}"#).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
