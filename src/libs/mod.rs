//! Core library modules for the timesheet tool.
//!
//! ## Features
//!
//! - **Date ranges**: inclusive calendar ranges for the report columns
//! - **Worklogs**: record validation and malformed-record policy
//! - **Aggregation**: issue-by-day grid with exact totals
//! - **Sources**: Jira JSON and CSV worklog dumps
//! - **Rendering**: terminal tables and CSV, JSON or Excel exports
//! - **Infrastructure**: configuration, data storage, messaging
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use jira_timesheet::libs::dates::DateRange;
//! use jira_timesheet::libs::timesheet::{aggregate, GridOptions};
//! use jira_timesheet::libs::worklog::{resolve, MalformedPolicy, RawWorklog, TimeSpent};
//!
//! let raw = vec![RawWorklog {
//!     issue_key: "A-1".into(),
//!     issue_summary: "Fix bug".into(),
//!     author: "alice".into(),
//!     started: "2024-01-02T09:00:00.000+0100".into(),
//!     time_spent: TimeSpent::Seconds(9000),
//! }];
//! let resolved = resolve(raw, MalformedPolicy::Fail).unwrap();
//! let range = DateRange::generate(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
//! )
//! .unwrap();
//! let sheet = aggregate(&resolved.worklogs, "alice", &range, &GridOptions::default());
//! assert_eq!(sheet.grid.cell(1, 2), Some("2.5"));
//! assert_eq!(sheet.grand_total_label(), "2.50");
//! ```

pub mod config;
pub mod data_storage;
pub mod dates;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod source;
pub mod timesheet;
pub mod view;
pub mod worklog;
