use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use firds_benchmarks::{Currency, Isin, RateDescriptor};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::LEGACY_CURRENCIES;

/// Reference data for one debt security.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityRecord {
    pub isin: Isin,
    /// Notional currency as stated in the source file.
    pub currency: Currency,
    /// Total issued nominal amount.
    pub nominal_amount: Decimal,
    pub maturity_date: NaiveDate,
    #[serde(default)]
    pub first_trade_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub termination_date: Option<DateTime<Utc>>,
    pub interest_rate: RateDescriptor,
}

impl SecurityRecord {
    /// Time left until maturity, negative once matured.
    pub fn maturity(&self, assessment_date: DateTime<Utc>) -> TimeDelta {
        self.maturity_date.and_time(NaiveTime::MIN).and_utc() - assessment_date
    }

    /// Whether trading was terminated before the assessment date.
    pub fn is_delisted(&self, assessment_date: DateTime<Utc>) -> bool {
        self.termination_date
            .is_some_and(|terminated| terminated < assessment_date)
    }

    /// Currency used for classification, with legacy codes optionally mapped
    /// to their successor (DEM is reported as EUR).
    pub fn effective_currency(&self, convert_legacy: bool) -> &str {
        if convert_legacy {
            if let Some((_, successor)) = LEGACY_CURRENCIES
                .iter()
                .find(|(legacy, _)| *legacy == self.currency)
            {
                return successor;
            }
        }
        &self.currency
    }
}
