//! Calendar date ranges for the timesheet column axis.
//!
//! A [`DateRange`] is always non-empty, contiguous and inclusive of both
//! bounds. Inverted bounds are rejected with [`ReportError::InvalidRange`]
//! before any iteration happens.

use super::error::{ReportError, Result};
use super::formatter::DATE_LABEL_FORMAT;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// An inclusive, gap-free run of calendar days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    dates: Vec<NaiveDate>,
}

impl DateRange {
    /// Builds the range `from..=to`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidRange`] when `to` is before `from`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use jira_timesheet::libs::dates::DateRange;
    ///
    /// let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let to = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    /// let range = DateRange::generate(from, to).unwrap();
    /// assert_eq!(range.len(), 3);
    /// ```
    pub fn generate(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        Ok(Self {
            dates: generate_dates(from, to)?,
        })
    }

    pub fn from_date(&self) -> NaiveDate {
        self.dates[0]
    }

    pub fn to_date(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from_date() <= date && date <= self.to_date()
    }

    /// Position of `date` on the column axis, if it falls inside the range.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        if self.contains(date) {
            Some((date - self.from_date()).num_days() as usize)
        } else {
            None
        }
    }

    /// Report label such as `01/01/24-31/01/24`.
    pub fn label(&self) -> String {
        format!(
            "{}-{}",
            self.from_date().format(DATE_LABEL_FORMAT),
            self.to_date().format(DATE_LABEL_FORMAT)
        )
    }
}

/// Produces every date from `from` to `to`, both included.
///
/// The bounds are checked up front so an inverted range fails instead of
/// iterating; the length is known before the first date is produced.
pub fn generate_dates(from: NaiveDate, to: NaiveDate) -> Result<Vec<NaiveDate>> {
    if to < from {
        return Err(ReportError::InvalidRange { from, to });
    }

    let days = (to - from).num_days();
    Ok((0..=days).map(|offset| from + Duration::days(offset)).collect())
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
