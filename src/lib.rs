//! # Jira Timesheet
//!
//! Turns Jira worklogs into an issue-by-day timesheet and renders it to the
//! terminal, CSV, JSON or a printable Excel sheet.
//!
//! ## Features
//!
//! - **Date Ranges**: inclusive column axis with explicit rejection of inverted bounds
//! - **Aggregation**: per-issue, per-day totals for one author with an exact grand total
//! - **Worklog Dumps**: Jira REST-shaped JSON and flat CSV input
//! - **Rendering**: weekend-aware tables and Excel sheets
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jira_timesheet::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
