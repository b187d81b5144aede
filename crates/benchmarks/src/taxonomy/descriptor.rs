//! Benchmark descriptor model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::Currency;

/// Structural kind of a benchmark descriptor.
///
/// Generic families (e.g. LIBOR) share one code across currencies, so a bare
/// code only identifies the family, never the currency. Only the family
/// catch-all matches by code, borrowing the currency from the security being
/// classified; every descriptor pinned to a currency ignores bare codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DescriptorKind {
    /// Family member denominated in one currency (e.g. GBP LIBOR).
    FamilyMember { family: String, currency: Currency },
    /// Currency-agnostic catch-all for a family.
    FamilyCatchAll { family: String },
    /// Standalone benchmark denominated in one currency.
    Specific { currency: Currency },
}

impl DescriptorKind {
    /// Whether a bare index code is enough to identify this benchmark.
    pub fn allows_code_match(&self) -> bool {
        match self {
            Self::FamilyCatchAll { .. } => true,
            Self::FamilyMember { .. } | Self::Specific { .. } => false,
        }
    }

    /// Configured currency, or `None` for a catch-all.
    pub fn currency(&self) -> Option<&str> {
        match self {
            Self::FamilyMember { currency, .. } | Self::Specific { currency } => Some(currency),
            Self::FamilyCatchAll { .. } => None,
        }
    }

    pub fn family(&self) -> Option<&str> {
        match self {
            Self::FamilyMember { family, .. } | Self::FamilyCatchAll { family } => Some(family),
            Self::Specific { .. } => None,
        }
    }

    pub fn is_generic(&self) -> bool {
        !matches!(self, Self::Specific { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FamilyMember { .. } => "family member",
            Self::FamilyCatchAll { .. } => "family catch-all",
            Self::Specific { .. } => "specific",
        }
    }
}

/// Everything known about one benchmark rate.
///
/// `names` is append-only: matching by root name adds the matched display
/// name so later identical names resolve by the name rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkDescriptor {
    label: String,
    kind: DescriptorKind,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    isins: BTreeSet<String>,
    #[serde(default)]
    names: BTreeSet<String>,
    #[serde(default)]
    root_names: Vec<Vec<String>>,
}

impl BenchmarkDescriptor {
    pub fn new(label: impl Into<String>, kind: DescriptorKind, code: Option<&str>) -> Self {
        Self {
            label: label.into(),
            kind,
            code: code.map(str::to_string),
            isins: BTreeSet::new(),
            names: BTreeSet::new(),
            root_names: Vec::new(),
        }
    }

    pub fn with_isins<I, S>(mut self, isins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.isins.extend(isins.into_iter().map(Into::into));
        self
    }

    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_root_name(mut self, words: &[&str]) -> Self {
        self.root_names
            .push(words.iter().map(|w| w.to_string()).collect());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &DescriptorKind {
        &self.kind
    }

    pub fn currency(&self) -> Option<&str> {
        self.kind.currency()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn isins(&self) -> &BTreeSet<String> {
        &self.isins
    }

    pub fn names(&self) -> &BTreeSet<String> {
        &self.names
    }

    pub fn root_names(&self) -> &[Vec<String>] {
        &self.root_names
    }

    /// Adds a learned display name. Returns `true` if it was not known yet.
    pub fn learn_name(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Label under which a match is reported for a security in `currency`.
    ///
    /// A catch-all takes the security's currency (e.g. "AUD LIBOR").
    pub fn resolved_label(&self, currency: &str) -> String {
        match &self.kind {
            DescriptorKind::FamilyCatchAll { family } => format!("{} {}", currency, family),
            _ => self.label.clone(),
        }
    }
}
