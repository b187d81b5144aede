//! Core error types.
//!
//! Every failure here is fatal to the enclosing batch. Outcomes that are
//! merely unusual (an unmatched floating rate, a currency mismatch) are
//! tallied as data instead.

use chrono::NaiveDate;
use firds_benchmarks::TaxonomyError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The interest rate is neither fixed nor floating.
    #[error("Malformed record {isin}: unexpected interest rate '{tag}'")]
    MalformedRecord { isin: String, tag: String },

    /// Files requested for one period were published on different dates.
    #[error("Ambiguous batch: files carry publication dates {dates:?}")]
    AmbiguousBatch { dates: Vec<NaiveDate> },

    /// The extraction layer could not produce a record.
    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Taxonomy error: {0}")]
    Taxonomy(#[from] TaxonomyError),

    #[error("Worker pool error: {0}")]
    WorkerPool(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Invalid reporting period: {0}")]
    InvalidPeriod(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn malformed_record(isin: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::MalformedRecord {
            isin: isin.into(),
            tag: tag.into(),
        }
    }

    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::malformed_record("XS0000000001", "Hybrid");
        assert_eq!(
            err.to_string(),
            "Malformed record XS0000000001: unexpected interest rate 'Hybrid'"
        );

        let err = Error::AmbiguousBatch {
            dates: vec![
                NaiveDate::from_ymd_opt(2020, 1, 4).unwrap(),
                NaiveDate::from_ymd_opt(2020, 1, 11).unwrap(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Ambiguous batch: files carry publication dates [2020-01-04, 2020-01-11]"
        );
    }

    #[test]
    fn test_taxonomy_error_converts() {
        let err: Error = TaxonomyError::UnknownBenchmark("BBSW".to_string()).into();
        assert!(matches!(err, Error::Taxonomy(_)));
    }
}
