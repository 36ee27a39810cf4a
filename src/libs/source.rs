//! Loading worklog records from tracker dump files.
//!
//! Two layouts are understood, picked by file extension:
//!
//! - **`.json`**: issues in the shape returned by the Jira REST API, with their
//!   worklogs either inline (`worklogs`) or under `fields.worklog.worklogs`
//! - **`.csv`**: one record per line with the header
//!   `issue_key,issue_summary,author,started,hours_spent`
//!
//! A `fields.worklog` page that reports more worklogs (`total`) than it
//! carries is rejected rather than loaded partially.
//!
//! Timestamps are kept as text here; validation happens in
//! [`crate::libs::worklog::resolve`].

use super::worklog::{RawWorklog, TimeSpent};
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_debug};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Deserialize, Debug)]
pub struct JiraDump {
    pub issues: Vec<JiraIssue>,
}

#[derive(Deserialize, Debug)]
pub struct JiraIssue {
    pub key: String,
    pub fields: JiraIssueFields,
    #[serde(default)]
    pub worklogs: Vec<JiraWorklog>,
}

#[derive(Deserialize, Debug)]
pub struct JiraIssueFields {
    #[serde(default)]
    pub summary: String,
    pub worklog: Option<JiraWorklogPage>,
}

/// The worklog page embedded in a search result; Jira caps it at 20 entries.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JiraWorklogPage {
    #[serde(default)]
    pub start_at: usize,
    pub max_results: Option<usize>,
    pub total: Option<usize>,
    #[serde(default)]
    pub worklogs: Vec<JiraWorklog>,
}

impl JiraWorklogPage {
    /// Whether the page holds every worklog of its issue.
    ///
    /// Pages without a `total` are taken as complete.
    pub fn is_complete(&self) -> bool {
        self.total.map_or(true, |total| self.start_at == 0 && self.worklogs.len() >= total)
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JiraWorklog {
    pub author: JiraAuthor,
    pub started: String,
    pub time_spent_seconds: i64,
}

/// Server instances identify users by `name`, cloud instances by `accountId`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JiraAuthor {
    pub name: Option<String>,
    pub account_id: Option<String>,
    pub display_name: Option<String>,
}

impl JiraAuthor {
    pub fn id(&self) -> &str {
        self.name
            .as_deref()
            .or(self.account_id.as_deref())
            .or(self.display_name.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Deserialize, Debug)]
struct CsvWorklog {
    issue_key: String,
    #[serde(default)]
    issue_summary: String,
    author: String,
    started: String,
    hours_spent: f64,
}

impl JiraDump {
    /// Flattens the dump into records, issue by issue, in file order.
    ///
    /// # Errors
    ///
    /// Fails when an embedded worklog page does not hold every worklog of its
    /// issue.
    pub fn into_records(self) -> Result<Vec<RawWorklog>> {
        let mut records = Vec::new();
        for issue in self.issues {
            let JiraIssue { key, fields, worklogs } = issue;
            let nested = match fields.worklog {
                Some(page) if !page.is_complete() => {
                    msg_bail_anyhow!(Message::TruncatedWorklogPage(
                        key,
                        page.worklogs.len(),
                        page.total.unwrap_or_default()
                    ))
                }
                Some(page) => page.worklogs,
                None => Vec::new(),
            };

            for worklog in worklogs.into_iter().chain(nested) {
                records.push(RawWorklog {
                    issue_key: key.clone(),
                    issue_summary: fields.summary.clone(),
                    author: worklog.author.id().to_string(),
                    started: worklog.started,
                    time_spent: TimeSpent::Seconds(worklog.time_spent_seconds),
                });
            }
        }
        Ok(records)
    }
}

/// Parses a Jira-shaped JSON dump.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<RawWorklog>> {
    let dump: JiraDump = serde_json::from_reader(reader)?;
    dump.into_records()
}

/// Parses a flat CSV dump.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RawWorklog>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        let row: CsvWorklog = row?;
        records.push(RawWorklog {
            issue_key: row.issue_key,
            issue_summary: row.issue_summary,
            author: row.author,
            started: row.started,
            time_spent: TimeSpent::Hours(row.hours_spent),
        });
    }
    Ok(records)
}

/// Loads raw worklog records from `path`, dispatching on its extension.
///
/// # Errors
///
/// Fails when the file cannot be opened, cannot be parsed, or has an
/// extension other than `json` or `csv`.
pub fn load(path: &Path) -> Result<Vec<RawWorklog>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let open = || File::open(path).with_context(|| Message::InputFileUnreadable(path.display().to_string()));
    let records = match extension.as_str() {
        "json" => read_json(open()?)?,
        "csv" => read_csv(open()?)?,
        _ => msg_bail_anyhow!(Message::UnsupportedInputFormat(path.display().to_string())),
    };

    msg_debug!(Message::WorklogsLoaded(records.len(), path.display().to_string()));
    Ok(records)
}
