//! Typed errors raised by the timesheet core.
//!
//! The core never prints or exits on its own. Each failure is returned as a
//! [`ReportError`] and the command layer decides how to present it.

use chrono::NaiveDate;
use thiserror::Error;

/// Failures of the date-range generator and the worklog aggregation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// The upper bound of a date range lies before its lower bound.
    #[error("Invalid date range: {to} is before {from}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    /// A worklog record that cannot be turned into a usable entry.
    #[error("Malformed worklog on {issue_key} (started '{started}'): {reason}")]
    MalformedRecord {
        issue_key: String,
        started: String,
        reason: String,
    },
}

impl ReportError {
    pub fn malformed(issue_key: impl Into<String>, started: impl Into<String>, reason: impl Into<String>) -> Self {
        ReportError::MalformedRecord {
            issue_key: issue_key.into(),
            started: started.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for the timesheet core.
pub type Result<T> = std::result::Result<T, ReportError>;
