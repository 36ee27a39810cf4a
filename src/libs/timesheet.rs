//! Worklog aggregation into an issue-by-day timesheet.
//!
//! [`aggregate`] filters worklogs down to one author and one [`DateRange`],
//! groups them by issue (first-seen order) and by day, and produces a
//! [`Timesheet`]: a rectangular [`Grid`] of formatted strings together with the
//! per-column weekend flags, the exact grand total and the range label that a
//! renderer needs.
//!
//! ## Grid Layout
//!
//! ```text
//!            | 01\nM | 02\nT | 03\nW |
//! A-1 - Fix  |       |  2.5  |  1.0  |
//! A-2 - Docs |  3.0  |       |       |
//! ```
//!
//! Row 0 holds the date headers, column 0 the issue labels and the corner
//! cell is empty. An author without matching records yields a header-only grid.
//!
//! ## Totals
//!
//! Cell totals are exact sums of `chrono::Duration`s. The grand total is
//! threaded through the same pass that produces the cells, so it always
//! equals the sum of the cell values; hours are only rounded when formatted.

use super::dates::{is_weekend, DateRange};
use super::formatter::{day_label, format_cell, format_total, issue_label, DEFAULT_LABEL_WIDTH};
use super::worklog::Worklog;
use crate::libs::error::ReportError;
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

/// Rendering options for the aggregation.
#[derive(Debug, Clone)]
pub struct GridOptions {
    /// Wrap width for the issue label column.
    pub label_width: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }
}

/// A rectangular matrix of formatted cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).map(String::as_str)
    }
}

/// Metadata for one date column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub date: NaiveDate,
    pub label: String,
    pub is_weekend: bool,
}

/// Numeric view of one issue row.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueRow {
    pub key: String,
    pub summary: String,
    /// Per-date totals, aligned with [`Timesheet::columns`].
    pub totals: Vec<Duration>,
}

impl IssueRow {
    pub fn total(&self) -> Duration {
        self.totals.iter().fold(Duration::zero(), |acc, d| acc + *d)
    }
}

/// Everything a renderer needs to draw the report.
#[derive(Debug, Clone)]
pub struct Timesheet {
    pub author: String,
    pub range: DateRange,
    pub grid: Grid,
    pub columns: Vec<Column>,
    pub issues: Vec<IssueRow>,
    pub grand_total: Duration,
    /// Records dropped before aggregation because they were malformed.
    pub skipped: Vec<ReportError>,
}

impl Timesheet {
    /// Weekend flag in grid coordinates; the label column is never a weekend.
    pub fn is_weekend_column(&self, col: usize) -> bool {
        col.checked_sub(1).and_then(|i| self.columns.get(i)).is_some_and(|c| c.is_weekend)
    }

    pub fn weekend_flags(&self) -> Vec<bool> {
        self.columns.iter().map(|c| c.is_weekend).collect()
    }

    pub fn grand_total_label(&self) -> String {
        format_total(&self.grand_total)
    }

    pub fn range_label(&self) -> String {
        self.range.label()
    }

    /// Report heading, e.g. `Jira Tasks Report (01/12/16-31/12/16)`.
    pub fn title(&self, prefix: &str) -> String {
        format!("{} ({})", prefix, self.range_label())
    }

    pub fn has_data(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn with_skipped(mut self, skipped: Vec<ReportError>) -> Self {
        self.skipped = skipped;
        self
    }
}

/// Builds the timesheet for `author` over `range`.
///
/// Records by other authors or dated outside the range are ignored. Issues
/// appear in the order they are first met among the surviving records.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use jira_timesheet::libs::dates::DateRange;
/// use jira_timesheet::libs::timesheet::{aggregate, GridOptions};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let range = DateRange::generate(day, day).unwrap();
/// let sheet = aggregate(&[], "alice", &range, &GridOptions::default());
/// assert_eq!(sheet.grid.row_count(), 1);
/// assert_eq!(sheet.grand_total_label(), "0.00");
/// ```
pub fn aggregate(worklogs: &[Worklog], author: &str, range: &DateRange, options: &GridOptions) -> Timesheet {
    let columns: Vec<Column> = range
        .dates()
        .iter()
        .map(|date| Column {
            date: *date,
            label: day_label(date),
            is_weekend: is_weekend(*date),
        })
        .collect();

    let issues = group_by_issue(worklogs, author, range);
    tracing::debug!(author, issues = issues.len(), days = range.len(), "grouped worklogs");

    let mut header = Vec::with_capacity(columns.len() + 1);
    header.push(String::new());
    header.extend(columns.iter().map(|c| c.label.clone()));

    let (rows, grand_total) = issues.iter().fold((vec![header], Duration::zero()), |(mut rows, total), issue| {
        let mut row = Vec::with_capacity(columns.len() + 1);
        row.push(issue_label(&issue.key, &issue.summary, options.label_width));
        row.extend(issue.totals.iter().map(format_cell));
        rows.push(row);
        (rows, total + issue.total())
    });

    Timesheet {
        author: author.to_string(),
        range: range.clone(),
        grid: Grid { rows },
        columns,
        issues,
        grand_total,
        skipped: Vec::new(),
    }
}

/// Filters and buckets worklogs into per-issue, per-day totals.
fn group_by_issue(worklogs: &[Worklog], author: &str, range: &DateRange) -> Vec<IssueRow> {
    let mut issues: Vec<IssueRow> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut matched = 0usize;

    for worklog in worklogs.iter().filter(|w| w.author == author) {
        let Some(day) = range.index_of(worklog.date()) else {
            continue;
        };
        matched += 1;

        let row = *index.entry(worklog.issue_key.as_str()).or_insert_with(|| {
            issues.push(IssueRow {
                key: worklog.issue_key.clone(),
                summary: worklog.issue_summary.clone(),
                totals: vec![Duration::zero(); range.len()],
            });
            issues.len() - 1
        });
        issues[row].totals[day] = issues[row].totals[day] + worklog.spent;
    }

    tracing::debug!(total = worklogs.len(), matched, "filtered worklogs");
    issues
}
