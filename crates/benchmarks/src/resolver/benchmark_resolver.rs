use log::warn;
use serde::{Deserialize, Serialize};

use super::currency_mismatch::CurrencyMismatchLog;
use crate::matcher::{match_benchmark, MatchKind};
use crate::models::{Currency, FloatingRate};
use crate::taxonomy::{BenchmarkDescriptor, BenchmarkTaxonomy};

/// Benchmark picked for a floating rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Canonical label, e.g. "GBP LIBOR" or "EURIBOR".
    pub benchmark: String,
    /// Benchmark currency; for a catch-all, the security's currency.
    pub currency: Currency,
    pub match_kind: MatchKind,
}

/// Resolves `rate` to at most one benchmark of `taxonomy`.
///
/// `currency` is the security's own currency and `isin` its identifier, used
/// only to log currency mismatches. Root-name matches grow the taxonomy.
pub fn resolve_benchmark(
    taxonomy: &mut BenchmarkTaxonomy,
    rate: &FloatingRate,
    currency: &str,
    isin: Option<&str>,
    mismatches: &mut CurrencyMismatchLog,
) -> Option<Resolution> {
    let resolution = first_match(taxonomy.generic_mut(), rate, currency)
        .or_else(|| first_match(taxonomy.specific_mut(), rate, currency))?;

    if let Some(isin) = isin {
        if resolution.currency != currency {
            warn!(
                "Security {} ({}) resolved to {} denominated in {}",
                isin, currency, resolution.benchmark, resolution.currency
            );
            mismatches.record(isin, resolution.currency.as_str(), currency);
        }
    }

    Some(resolution)
}

fn first_match(
    descriptors: &mut [BenchmarkDescriptor],
    rate: &FloatingRate,
    currency: &str,
) -> Option<Resolution> {
    descriptors.iter_mut().find_map(|descriptor| {
        let check_code = descriptor.kind().allows_code_match();
        let match_kind = match_benchmark(descriptor, rate, check_code)?;
        Some(Resolution {
            benchmark: descriptor.resolved_label(currency),
            currency: descriptor.currency().unwrap_or(currency).to_string(),
            match_kind,
        })
    })
}
