use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Interest-rate description of a debt security.
///
/// Produced once per security by the extraction layer and never mutated.
/// `Unrecognized` carries the element tag of a rate that is neither fixed
/// nor floating; classifying such a record is a fatal error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RateDescriptor {
    Fixed {
        #[serde(default)]
        rate: Option<Decimal>,
    },
    Floating(FloatingRate),
    Unrecognized {
        tag: String,
    },
}

impl RateDescriptor {
    pub fn is_floating(&self) -> bool {
        matches!(self, Self::Floating(_))
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed { .. })
    }
}

/// Floating-rate leg: the reference index plus term and spread.
///
/// At most one of `index_name`, `index_code` and `index_isin` is expected
/// to be populated, mirroring the choice element in the source data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatingRate {
    #[serde(default)]
    pub index_name: Option<String>,
    #[serde(default)]
    pub index_code: Option<String>,
    #[serde(default)]
    pub index_isin: Option<String>,
    #[serde(default)]
    pub term: Option<Term>,
    /// Basis point spread over the index.
    #[serde(default)]
    pub spread: Option<Decimal>,
}

impl FloatingRate {
    /// A floating rate referencing its index by free-text name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            index_name: Some(name.into()),
            ..Self::default()
        }
    }

    /// A floating rate referencing its index by code (e.g. "EURI").
    pub fn coded(code: impl Into<String>) -> Self {
        Self {
            index_code: Some(code.into()),
            ..Self::default()
        }
    }

    /// A floating rate referencing its index by ISIN.
    pub fn with_isin(isin: impl Into<String>) -> Self {
        Self {
            index_isin: Some(isin.into()),
            ..Self::default()
        }
    }

    pub fn with_term(mut self, unit: impl Into<String>, value: Decimal) -> Self {
        self.term = Some(Term {
            unit: unit.into(),
            value,
        });
        self
    }

    pub fn with_spread(mut self, spread: Decimal) -> Self {
        self.spread = Some(spread);
        self
    }

    /// Every identifier this rate carries, ISIN first, then name, then code.
    pub fn identifiers(&self) -> impl Iterator<Item = (IdentifierKind, &str)> {
        [
            (IdentifierKind::Isin, self.index_isin.as_deref()),
            (IdentifierKind::Name, self.index_name.as_deref()),
            (IdentifierKind::Code, self.index_code.as_deref()),
        ]
        .into_iter()
        .filter_map(|(kind, value)| value.map(|value| (kind, value)))
    }
}

/// Reset term of a floating rate (e.g. 3 MNTH).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub unit: String,
    pub value: Decimal,
}

/// Which identifier a floating rate used to reference its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    Name,
    Code,
    Isin,
}

impl IdentifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "index_name",
            Self::Code => "index_code",
            Self::Isin => "index_isin",
        }
    }
}
