//! Timesheet export to files.
//!
//! Writes a built [`Timesheet`] without re-deriving anything from worklogs:
//! the grid, weekend flags, grand total and range label are taken as they are.
//!
//! ## Features
//!
//! - **CSV**: title line, the grid rows as-is, and the total line
//! - **JSON**: structured dump with numeric hours per issue and day
//! - **Excel**: printable sheet in landscape letter format, bordered grid with
//!   bold headers, numeric hour cells, narrow date columns and shaded weekend
//!   columns
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jira_timesheet::libs::config::ReportConfig;
//! use jira_timesheet::libs::export::{ExportFormat, Exporter};
//! # use jira_timesheet::libs::timesheet::Timesheet;
//! # fn run(sheet: &Timesheet) -> anyhow::Result<()> {
//! let exporter = Exporter::new(ExportFormat::Excel, None, "joe.doe");
//! exporter.export(sheet, &ReportConfig::default())?;
//! # Ok(())
//! # }
//! ```

use crate::libs::config::ReportConfig;
use crate::libs::formatter::{duration_hours, format_total};
use crate::libs::messages::Message;
use crate::libs::timesheet::Timesheet;
use crate::msg_success;
use anyhow::Result;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Excel paper size code for US Letter.
const PAPER_LETTER: u8 = 1;
const GRID_BORDER: Color = Color::RGB(0xD3D3D3);
const WEEKEND_FILL: Color = Color::RGB(0xF5F5F5);
const FONT_SIZE: f64 = 8.0;
const HOURS_FORMAT: &str = "0.0";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Serializable timesheet for JSON output.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportTimesheet {
    pub title: String,
    pub author: String,
    /// First day of the range in YYYY-MM-DD format
    pub from: String,
    /// Last day of the range in YYYY-MM-DD format
    pub to: String,
    pub columns: Vec<ExportColumn>,
    pub issues: Vec<ExportIssue>,
    /// Grand total in hours, unrounded
    pub grand_total: f64,
    /// Grand total as displayed, two decimals
    pub total_hours: String,
    /// Descriptions of records skipped as malformed
    pub skipped: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportColumn {
    pub date: String,
    pub is_weekend: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportIssue {
    pub key: String,
    pub summary: String,
    /// Hours per day, aligned with `columns`
    pub hours: Vec<f64>,
    pub total: f64,
}

impl ExportTimesheet {
    pub fn new(sheet: &Timesheet, title: &str) -> Self {
        Self {
            title: sheet.title(title),
            author: sheet.author.clone(),
            from: sheet.range.from_date().format("%Y-%m-%d").to_string(),
            to: sheet.range.to_date().format("%Y-%m-%d").to_string(),
            columns: sheet
                .columns
                .iter()
                .map(|c| ExportColumn {
                    date: c.date.format("%Y-%m-%d").to_string(),
                    is_weekend: c.is_weekend,
                })
                .collect(),
            issues: sheet
                .issues
                .iter()
                .map(|issue| ExportIssue {
                    key: issue.key.clone(),
                    summary: issue.summary.clone(),
                    hours: issue.totals.iter().map(duration_hours).collect(),
                    total: duration_hours(&issue.total()),
                })
                .collect(),
            grand_total: duration_hours(&sheet.grand_total),
            total_hours: format_total(&sheet.grand_total),
            skipped: sheet.skipped.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Content of one spreadsheet cell of the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetCell<'a> {
    Blank,
    /// Header and label text.
    Text(&'a str),
    /// Hours logged on one issue and day, written as a number.
    Hours(f64),
}

/// Picks the spreadsheet content for grid position `(row, col)`.
///
/// Data cells carry the unrounded hours so the spreadsheet can sum them;
/// the one-decimal display comes from the cell number format.
pub fn sheet_cell(sheet: &Timesheet, row: usize, col: usize) -> SheetCell<'_> {
    if row > 0 && col > 0 {
        return match sheet.issues.get(row - 1).and_then(|issue| issue.totals.get(col - 1)) {
            Some(total) if !total.is_zero() => SheetCell::Hours(duration_hours(total)),
            _ => SheetCell::Blank,
        };
    }
    match sheet.grid.cell(row, col) {
        Some(value) if !value.is_empty() => SheetCell::Text(value),
        _ => SheetCell::Blank,
    }
}

/// Writes timesheets in one format to one destination.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter; without an explicit path the file is named after the assignee,
    /// e.g. `joe.doe.xlsx`.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, assignee: &str) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", assignee, format.extension())));
        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `sheet` using the layout settings from `report`.
    pub fn export(&self, sheet: &Timesheet, report: &ReportConfig) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(sheet, &report.title)?,
            ExportFormat::Json => self.export_json(sheet, &report.title)?,
            ExportFormat::Excel => self.export_excel(sheet, report)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_csv(&self, sheet: &Timesheet, title: &str) -> Result<()> {
        let width = sheet.grid.column_count();
        let padded = |first: String, second: String| {
            let mut record = vec![first, second];
            record.resize(width.max(2), String::new());
            record
        };

        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&self.output_path)?;
        wtr.write_record(padded(sheet.title(title), String::new()))?;
        for row in sheet.grid.rows() {
            wtr.write_record(row)?;
        }
        wtr.write_record(padded("Total Hours".to_string(), sheet.grand_total_label()))?;

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, sheet: &Timesheet, title: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(&ExportTimesheet::new(sheet, title))?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, sheet: &Timesheet, report: &ReportConfig) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_landscape().set_paper_size(PAPER_LETTER);

        let base = Format::new()
            .set_font_size(FONT_SIZE)
            .set_border(FormatBorder::Thin)
            .set_border_color(GRID_BORDER)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap();
        let hours = base.clone().set_num_format(HOURS_FORMAT);
        let header = base.clone().set_bold();
        let label = base.clone().set_bold().set_align(FormatAlign::Left);
        let title_format = Format::new().set_bold().set_font_size(15.0).set_align(FormatAlign::Center);
        let total_format = Format::new().set_font_size(10.0).set_align(FormatAlign::Center);

        let last_col = (sheet.grid.column_count() - 1) as u16;
        worksheet.merge_range(0, 0, 0, last_col, &sheet.title(&report.title), &title_format)?;

        // Grid starts below the title and a spacer row
        let top = 2u32;
        for (r, row) in sheet.grid.rows().iter().enumerate() {
            for c in 0..row.len() {
                let mut format = match (r, c) {
                    (_, 0) => label.clone(),
                    (0, _) => header.clone(),
                    _ => hours.clone(),
                };
                if sheet.is_weekend_column(c) {
                    format = format.set_background_color(WEEKEND_FILL);
                }

                let (row_idx, col_idx) = (top + r as u32, c as u16);
                match sheet_cell(sheet, r, c) {
                    SheetCell::Blank => worksheet.write_blank(row_idx, col_idx, &format)?,
                    SheetCell::Text(value) => worksheet.write_string_with_format(row_idx, col_idx, value, &format)?,
                    SheetCell::Hours(value) => worksheet.write_number_with_format(row_idx, col_idx, value, &format)?,
                };
            }
        }
        worksheet.set_row_height(top, 24.0)?;

        worksheet.set_column_width(0, report.label_width as f64)?;
        for col in 1..=last_col {
            worksheet.set_column_width(col, report.column_width)?;
        }

        let total_row = top + sheet.grid.row_count() as u32 + 1;
        let total = Message::TotalHours(sheet.grand_total_label()).to_string();
        worksheet.merge_range(total_row, 0, total_row, last_col, &total, &total_format)?;

        workbook.save(&self.output_path)?;
        Ok(())
    }
}
