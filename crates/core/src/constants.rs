use chrono::TimeDelta;

/// Days per year used to express maturities in years
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Seconds per year, derived from [`DAYS_PER_YEAR`]
pub const SECONDS_PER_YEAR: f64 = DAYS_PER_YEAR * 86_400.0;

/// Legacy currency codes and the currency they are reported as
pub const LEGACY_CURRENCIES: &[(&str, &str)] = &[("DEM", "EUR")];

/// Converts a duration to fractional years.
pub fn duration_to_years(duration: TimeDelta) -> f64 {
    duration.num_seconds() as f64 / SECONDS_PER_YEAR
}
