//! Timesheet export command.
//!
//! Builds the same timesheet as `report` and writes it to a file instead of
//! the terminal.
//!
//! ## Supported Export Formats
//!
//! - **CSV**: the grid with title and total lines
//! - **JSON**: structured data with numeric hours
//! - **Excel**: printable landscape sheet with shaded weekends
//!
//! ```bash
//! # Printable sheet named after the assignee (joe.doe.xlsx)
//! jira-timesheet export -i worklogs.json -a joe.doe --from 2016-12-01 --to 2016-12-31
//!
//! # JSON to a chosen path
//! jira-timesheet export -f json -o december.json
//! ```

use super::report::{prepare, SheetArgs};
use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    sheet: SheetArgs,

    /// Output format for the timesheet
    #[arg(short, long, value_enum, default_value = "excel")]
    format: ExportFormat,

    /// Output file path; defaults to `<assignee>.<extension>`
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let (sheet, report) = prepare(&args.sheet)?;

    msg_info!(Message::ExportingTimesheet(format!("{:?}", args.format)));
    let exporter = Exporter::new(args.format, args.output, &sheet.author);
    exporter.export(&sheet, &report)?;

    Ok(())
}
