use super::timesheet::Timesheet;
use prettytable::{format, Cell, Row, Table};

/// Weekend columns are drawn in yellow; every cell is centered except labels.
const WEEKEND_STYLE: &str = "cFy";
const CELL_STYLE: &str = "c";
const LABEL_STYLE: &str = "lb";

pub struct View {}

impl View {
    /// Builds the terminal table for a timesheet grid.
    pub fn timesheet_table(sheet: &Timesheet) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        for (r, row) in sheet.grid.rows().iter().enumerate() {
            let cells = row
                .iter()
                .enumerate()
                .map(|(c, value)| {
                    let style = match c {
                        0 => LABEL_STYLE,
                        _ if sheet.is_weekend_column(c) => WEEKEND_STYLE,
                        _ => CELL_STYLE,
                    };
                    Cell::new(value).style_spec(style)
                })
                .collect();
            if r == 0 {
                table.set_titles(Row::new(cells));
            } else {
                table.add_row(Row::new(cells));
            }
        }

        table
    }

    pub fn timesheet(sheet: &Timesheet) {
        Self::timesheet_table(sheet).printstd();
    }
}
