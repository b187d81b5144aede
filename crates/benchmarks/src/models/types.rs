/// ISO 4217 currency code (e.g. "GBP").
pub type Currency = String;

/// ISO 6166 security identifier.
pub type Isin = String;
