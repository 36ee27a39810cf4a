//! Timesheet report command.
//!
//! Collects the report parameters, builds the timesheet and prints it as a
//! table. The parameter handling here is shared with the export command.
//!
//! ## Parameter Resolution
//!
//! Each of input file, assignee, from date and to date is taken from:
//! 1. the command-line argument
//! 2. its environment variable (`.env` files are honoured)
//! 3. the `source` section of the configuration (file and assignee only)
//! 4. an interactive prompt

use crate::{
    libs::{
        config::{Config, ReportConfig},
        dates::DateRange,
        messages::Message,
        source,
        timesheet::{aggregate, Timesheet},
        view::View,
        worklog::{resolve, MalformedPolicy},
    },
    msg_error_anyhow, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::Path;

/// Parameters that select which worklogs make up a timesheet.
#[derive(Debug, Args)]
pub struct SheetArgs {
    /// Worklog dump file (.json Jira export or .csv)
    #[arg(short, long, env = "JIRA_WORKLOG_FILE")]
    pub input: Option<String>,

    /// Author whose worklogs are reported
    #[arg(short, long, env = "JIRA_WORKLOG_ASSIGNEE")]
    pub assignee: Option<String>,

    /// First day of the report (YYYY-MM-DD or 'today')
    #[arg(long, env = "JIRA_WORKLOG_FROM_DATE")]
    pub from: Option<String>,

    /// Last day of the report, inclusive (YYYY-MM-DD or 'today')
    #[arg(long, env = "JIRA_WORKLOG_TO_DATE")]
    pub to: Option<String>,

    /// Override the configured handling of malformed worklogs
    #[arg(long, value_enum)]
    pub on_malformed: Option<MalformedPolicy>,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    sheet: SheetArgs,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let (sheet, report) = prepare(&args.sheet)?;

    msg_print!(Message::ReportHeader(sheet.title(&report.title)), true);
    if !sheet.has_data() {
        msg_info!(Message::NoWorklogsFound(sheet.author.clone(), sheet.range_label()));
    }
    View::timesheet(&sheet);
    msg_print!(Message::TotalHours(sheet.grand_total_label()), true);

    Ok(())
}

/// Resolves the parameters and builds the timesheet together with the report settings.
///
/// The date range is validated before the dump file is read, so inverted
/// bounds fail without touching the input.
pub fn prepare(args: &SheetArgs) -> Result<(Timesheet, ReportConfig)> {
    let config = Config::read()?;
    let report = config.report_or_default();
    let defaults = config.source.clone().unwrap_or_default();

    let input = value_or_prompt(&args.input, &defaults.input, Message::PromptInputFile)?;
    let assignee = value_or_prompt(&args.assignee, &defaults.assignee, Message::PromptAssignee)?;
    let from = date_or_prompt(&args.from, Message::PromptFromDate)?;
    let to = date_or_prompt(&args.to, Message::PromptToDate)?;
    let range = DateRange::generate(from, to)?;

    let policy = args.on_malformed.unwrap_or(report.on_malformed);
    let resolved = resolve(source::load(Path::new(&input))?, policy)?;
    if !resolved.skipped.is_empty() {
        for error in &resolved.skipped {
            msg_warning!(Message::MalformedRecordSkipped(error.to_string()));
        }
        msg_warning!(Message::SkippedRecordsSummary(resolved.skipped.len()));
    }

    let sheet = aggregate(&resolved.worklogs, &assignee, &range, &report.grid_options()).with_skipped(resolved.skipped);
    Ok((sheet, report))
}

/// Parses `today` or an ISO `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(value.to_string())))
}

fn value_or_prompt(value: &Option<String>, default: &str, prompt: Message) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ if !default.is_empty() => Ok(default.to_string()),
        _ => Ok(Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .interact_text()?),
    }
}

fn date_or_prompt(value: &Option<String>, prompt: Message) -> Result<NaiveDate> {
    match value {
        Some(value) => parse_date(value),
        None => {
            let entered: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt.to_string())
                .interact_text()?;
            parse_date(&entered)
        }
    }
}
