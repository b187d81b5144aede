use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Currency, Isin};

/// Benchmark currency that disagrees with the security's stated currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyMismatch {
    pub benchmark_currency: Currency,
    pub security_currency: Currency,
}

/// Advisory log keyed by security ISIN. Append-only; a repeated ISIN keeps
/// its latest entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyMismatchLog {
    entries: BTreeMap<Isin, CurrencyMismatch>,
}

impl CurrencyMismatchLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        isin: impl Into<Isin>,
        benchmark_currency: impl Into<Currency>,
        security_currency: impl Into<Currency>,
    ) {
        self.entries.insert(
            isin.into(),
            CurrencyMismatch {
                benchmark_currency: benchmark_currency.into(),
                security_currency: security_currency.into(),
            },
        );
    }

    pub fn get(&self, isin: &str) -> Option<&CurrencyMismatch> {
        self.entries.get(isin)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Isin, &CurrencyMismatch)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unions `other` into this log; entries from `other` win on shared ISINs.
    pub fn merge(&mut self, other: &CurrencyMismatchLog) {
        self.entries
            .extend(other.entries.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}
