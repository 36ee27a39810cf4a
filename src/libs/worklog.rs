//! Worklog records and their validation.
//!
//! Records arrive from a dump file as [`RawWorklog`]s with the timestamp still
//! in text form. [`resolve`] turns them into [`Worklog`]s, applying the
//! configured [`MalformedPolicy`] to anything that cannot be parsed.

use super::error::{ReportError, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timestamp layouts accepted for `started`, tried in order after RFC 3339.
///
/// The first one is what Jira returns, e.g. `2016-12-01T10:15:00.000+0100`.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// What to do with a record whose timestamp or duration is unusable.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Drop the record and report it back in the skipped list.
    #[default]
    Skip,
    /// Abort the whole report on the first malformed record.
    Fail,
}

/// Time spent on an issue, as delivered by the tracker dump.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeSpent {
    Seconds(i64),
    Hours(f64),
}

/// A worklog record before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawWorklog {
    pub issue_key: String,
    pub issue_summary: String,
    pub author: String,
    pub started: String,
    pub time_spent: TimeSpent,
}

/// A validated unit of time spent by an author on an issue.
#[derive(Debug, Clone, PartialEq)]
pub struct Worklog {
    pub issue_key: String,
    pub issue_summary: String,
    pub author: String,
    /// Wall-clock start as written in the tracker, offset dropped.
    pub started: NaiveDateTime,
    pub spent: Duration,
}

impl Worklog {
    pub fn date(&self) -> NaiveDate {
        self.started.date()
    }

    pub fn hours(&self) -> f64 {
        self.spent.num_milliseconds() as f64 / 3_600_000.0
    }
}

impl TryFrom<RawWorklog> for Worklog {
    type Error = ReportError;

    fn try_from(raw: RawWorklog) -> Result<Self> {
        let started = parse_started(&raw.started)
            .ok_or_else(|| ReportError::malformed(&raw.issue_key, &raw.started, "unrecognized timestamp format"))?;
        let spent = match raw.time_spent {
            TimeSpent::Seconds(seconds) if seconds >= 0 => Duration::seconds(seconds),
            TimeSpent::Hours(hours) if hours.is_finite() && hours >= 0.0 => Duration::milliseconds((hours * 3_600_000.0).round() as i64),
            TimeSpent::Seconds(_) | TimeSpent::Hours(_) => {
                return Err(ReportError::malformed(&raw.issue_key, &raw.started, "time spent must be a non-negative number"));
            }
        };

        Ok(Self {
            issue_key: raw.issue_key,
            issue_summary: raw.issue_summary,
            author: raw.author,
            started,
            spent,
        })
    }
}

/// Parses a worklog start timestamp into its wall-clock value.
///
/// Offsets are accepted but not applied: a log written at 00:30+0200 belongs to
/// that calendar day, not to the previous day in UTC.
pub fn parse_started(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.naive_local());
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok().and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Outcome of validating a batch of raw records.
#[derive(Debug, Default)]
pub struct Resolved {
    pub worklogs: Vec<Worklog>,
    pub skipped: Vec<ReportError>,
}

/// Validates raw records in input order.
///
/// Skipped records are only returned, not reported; the caller decides how
/// to surface them.
///
/// # Errors
///
/// With [`MalformedPolicy::Fail`], returns the first [`ReportError::MalformedRecord`].
pub fn resolve(raw: Vec<RawWorklog>, policy: MalformedPolicy) -> Result<Resolved> {
    let mut resolved = Resolved::default();

    for record in raw {
        match Worklog::try_from(record) {
            Ok(worklog) => resolved.worklogs.push(worklog),
            Err(err) => match policy {
                MalformedPolicy::Fail => return Err(err),
                MalformedPolicy::Skip => resolved.skipped.push(err),
            },
        }
    }

    tracing::debug!(valid = resolved.worklogs.len(), skipped = resolved.skipped.len(), "resolved worklogs");
    Ok(resolved)
}
