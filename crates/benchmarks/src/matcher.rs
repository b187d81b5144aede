//! Matching a floating rate against a single benchmark descriptor.
//!
//! Rules are tried in order and the first hit wins:
//!
//! 1. **Code** - index code equals the descriptor code (only when code checks are allowed)
//! 2. **ISIN** - index ISIN is one of the descriptor's ISINs
//! 3. **Name** - upper-cased index name is a known name, a known ISIN or the code
//! 4. **Root name** - every word of some root-name tuple appears among the name's tokens
//!
//! A root-name hit teaches the descriptor the full upper-cased name, so the
//! next identical name is caught by rule 3.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::FloatingRate;
use crate::taxonomy::BenchmarkDescriptor;

/// Rule that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Code,
    Isin,
    Name,
    RootName,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Isin => "isin",
            Self::Name => "name",
            Self::RootName => "root_name",
        }
    }
}

/// Splits an index name on spaces, hyphens and plus signs.
pub fn tokenize(name: &str) -> Vec<&str> {
    name.split(|c| matches!(c, ' ' | '-' | '+')).collect()
}

/// Decides whether `rate` references `descriptor`, without learning.
///
/// `check_code` must only be set for descriptors whose code identifies them
/// on its own (see [`DescriptorKind::allows_code_match`](crate::DescriptorKind::allows_code_match)).
pub fn evaluate(
    descriptor: &BenchmarkDescriptor,
    rate: &FloatingRate,
    check_code: bool,
) -> Option<MatchKind> {
    if check_code {
        if let (Some(code), Some(expected)) = (rate.index_code.as_deref(), descriptor.code()) {
            if code == expected {
                return Some(MatchKind::Code);
            }
        }
    }

    if let Some(isin) = rate.index_isin.as_deref() {
        if descriptor.isins().contains(isin) {
            return Some(MatchKind::Isin);
        }
    }

    let name = match rate.index_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_uppercase(),
        _ => return None,
    };

    // Source data mixes names, ISINs and codes in the name field.
    if descriptor.names().contains(&name)
        || descriptor.isins().contains(&name)
        || descriptor.code() == Some(name.as_str())
    {
        return Some(MatchKind::Name);
    }

    let tokens = tokenize(&name);
    let root_hit = descriptor.root_names().iter().any(|words| {
        words
            .iter()
            .all(|word| tokens.contains(&word.to_uppercase().as_str()))
    });
    if root_hit {
        return Some(MatchKind::RootName);
    }

    None
}

/// Matches `rate` against `descriptor`, learning the name on a root-name hit.
pub fn match_benchmark(
    descriptor: &mut BenchmarkDescriptor,
    rate: &FloatingRate,
    check_code: bool,
) -> Option<MatchKind> {
    let kind = evaluate(descriptor, rate, check_code)?;

    if kind == MatchKind::RootName {
        if let Some(name) = rate.index_name.as_deref() {
            let learned = name.to_uppercase();
            debug!("Learned name '{}' for {}", learned, descriptor.label());
            descriptor.learn_name(learned);
        }
    }

    Some(kind)
}
