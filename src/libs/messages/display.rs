//! Display implementation for application messages.
//!
//! All user-facing text lives here, so commands only pick a [`Message`]
//! variant and never format strings of their own.
//!
//! ```rust
//! use jira_timesheet::libs::messages::Message;
//!
//! let message = Message::TotalHours("3.50".to_string());
//! assert_eq!(message.to_string(), "Total Hours: 3.50");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleReport => "Report settings".to_string(),
            Message::ConfigModuleSource => "Worklog source settings".to_string(),

            // === INPUT MESSAGES ===
            Message::WorklogsLoaded(count, path) => format!("Loaded {} worklog record(s) from {}", count, path),
            Message::UnsupportedInputFormat(path) => format!("Unsupported worklog file '{}': expected a .json or .csv dump", path),
            Message::InputFileUnreadable(path) => format!("Cannot open worklog file '{}'", path),
            Message::TruncatedWorklogPage(key, loaded, total) => format!(
                "Worklogs of {} are incomplete: the dump holds {} of {}; export the full list from /rest/api/2/issue/{}/worklog",
                key, loaded, total, key
            ),
            Message::InvalidDate(value) => format!("Invalid date '{}': use YYYY-MM-DD or 'today'", value),
            Message::MalformedRecordSkipped(error) => format!("Skipped worklog: {}", error),
            Message::SkippedRecordsSummary(count) => format!("{} malformed worklog record(s) were skipped", count),

            // === REPORT MESSAGES ===
            Message::ReportHeader(title) => title.clone(),
            Message::TotalHours(total) => format!("Total Hours: {}", total),
            Message::NoWorklogsFound(author, range) => format!("No worklogs found for {} in {}", author, range),

            // === EXPORT MESSAGES ===
            Message::ExportingTimesheet(format) => format!("Exporting timesheet as {}...", format),
            Message::ExportCompleted(path) => format!("Timesheet written to {}", path),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptReportTitle => "Report title".to_string(),
            Message::PromptLabelWidth => "Issue label wrap width (characters)".to_string(),
            Message::PromptColumnWidth => "Excel date column width".to_string(),
            Message::PromptMalformedPolicy => "On malformed worklogs".to_string(),
            Message::PromptInputFile => "Worklog dump file (.json or .csv)".to_string(),
            Message::PromptAssignee => "Assignee (e.g. joe.doe)".to_string(),
            Message::PromptFromDate => "From date (e.g. 2016-12-01)".to_string(),
            Message::PromptToDate => "To date (e.g. 2016-12-31)".to_string(),
        };

        write!(f, "{}", text)
    }
}
