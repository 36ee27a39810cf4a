//! Formatting helpers for timesheet cells, labels and totals.
//!
//! Durations are carried as exact `chrono::Duration` values through the whole
//! aggregation and only converted to decimal hours here, at the display boundary.
//!
//! ## Format Specifications
//!
//! - Cells: one decimal place (`"2.5"`), or `""` when nothing was logged
//! - Grand total: two decimal places (`"3.50"`)
//! - Column headers: day of month and weekday initial on two lines (`"05\nT"`)
//! - Row labels: `"KEY - Summary"`, wrapped to a fixed width
//!
//! ## Examples
//!
//! ```rust
//! use jira_timesheet::libs::formatter::{format_cell, format_total};
//! use chrono::Duration;
//!
//! assert_eq!(format_cell(&Duration::minutes(150)), "2.5");
//! assert_eq!(format_cell(&Duration::zero()), "");
//! assert_eq!(format_total(&Duration::minutes(210)), "3.50");
//! ```

use chrono::{Duration, NaiveDate};

/// Date format used in the report title range, e.g. `01/12/16`.
pub const DATE_LABEL_FORMAT: &str = "%d/%m/%y";

/// Default wrap width for issue labels.
pub const DEFAULT_LABEL_WIDTH: usize = 50;

/// Converts a duration to decimal hours without intermediate rounding.
pub fn duration_hours(duration: &Duration) -> f64 {
    duration.num_milliseconds() as f64 / 3_600_000.0
}

/// Formats a duration as hours with the given number of decimals.
pub fn format_hours(duration: &Duration, precision: usize) -> String {
    format!("{:.*}", precision, duration_hours(duration))
}

/// Formats a grid cell; an exactly-zero total renders as an empty string.
pub fn format_cell(duration: &Duration) -> String {
    if duration.is_zero() {
        String::new()
    } else {
        format_hours(duration, 1)
    }
}

pub fn format_total(duration: &Duration) -> String {
    format_hours(duration, 2)
}

/// Two-line column header: day of month over the weekday initial.
pub fn day_label(date: &NaiveDate) -> String {
    let weekday = date.format("%a").to_string();
    let initial = weekday.chars().next().unwrap_or(' ');
    format!("{}\n{}", date.format("%d"), initial)
}

/// Builds the `"KEY - Summary"` row label for an issue and wraps it to `width` columns.
pub fn issue_label(key: &str, summary: &str, width: usize) -> String {
    wrap_label(&format!("{} - {}", key, summary), width)
}

/// Reflows `text` onto lines of at most `width` characters.
///
/// Breaks happen at whitespace runs, which become the line break; a single
/// word longer than `width` is split mid-word. Whitespace inside a line is
/// kept as written.
pub fn wrap_label(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut line: Vec<char> = Vec::new();
    let mut gap: Vec<char> = Vec::new();

    for (is_space, mut token) in split_runs(text) {
        if is_space {
            gap = token;
            continue;
        }

        if line.len() + gap.len() + token.len() <= width {
            line.append(&mut gap);
            line.append(&mut token);
            continue;
        }

        if !line.is_empty() {
            lines.push(line.drain(..).collect());
        }
        gap.clear();
        // Hard-split words that cannot fit on any line
        while token.len() > width {
            let rest = token.split_off(width);
            lines.push(token.into_iter().collect());
            token = rest;
        }
        line = token;
    }

    if line.len() + gap.len() <= width {
        line.append(&mut gap);
    }
    if !line.is_empty() {
        lines.push(line.into_iter().collect());
    }

    lines.join("\n")
}

/// Splits `text` into alternating runs of whitespace and non-whitespace.
fn split_runs(text: &str) -> Vec<(bool, Vec<char>)> {
    let mut runs: Vec<(bool, Vec<char>)> = Vec::new();
    for ch in text.chars() {
        let is_space = ch.is_whitespace();
        match runs.last_mut() {
            Some((space, run)) if *space == is_space => run.push(ch),
            _ => runs.push((is_space, vec![ch])),
        }
    }
    runs
}
