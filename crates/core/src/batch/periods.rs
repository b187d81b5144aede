//! Reporting periods and publication-date gating.

use std::collections::BTreeSet;

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Inclusive date window covered by one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportingPeriod {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Consecutive periods of length `step` starting at `from`, for every start
/// date before `to`. The last period may extend past `to`.
///
/// `step` must be a whole number of days, at least one.
pub fn iter_periods(
    from: NaiveDate,
    to: NaiveDate,
    step: TimeDelta,
) -> Result<impl Iterator<Item = ReportingPeriod>> {
    if step < TimeDelta::days(1) || step.num_seconds() % 86_400 != 0 {
        return Err(Error::InvalidPeriod(format!(
            "step must be a positive number of whole days, got {}",
            step
        )));
    }
    let span = step - TimeDelta::days(1);

    Ok(
        std::iter::successors(Some(from), move |start| start.checked_add_signed(step))
            .take_while(move |start| *start < to)
            .map_while(move |start| {
                start
                    .checked_add_signed(span)
                    .map(|end| ReportingPeriod { start, end })
            }),
    )
}

/// Publication date shared by all files of a batch.
///
/// Returns `None` when there are no dates, and [`Error::AmbiguousBatch`] when
/// the files were published on more than one date.
pub fn ensure_single_publication<I>(dates: I) -> Result<Option<NaiveDate>>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let distinct: BTreeSet<NaiveDate> = dates.into_iter().collect();
    if distinct.len() > 1 {
        return Err(Error::AmbiguousBatch {
            dates: distinct.into_iter().collect(),
        });
    }
    Ok(distinct.into_iter().next())
}
