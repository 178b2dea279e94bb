// Column contract of the backing spreadsheet.
//
// A date, B clock-in, C clock-out, D spacer, E duration formula.
// G/H rows 2-4 hold the start date, end date and total time cells.
// Row 1 is always the header, data starts at row 2.

use std::fmt;

pub const DOCUMENT_TITLE: &str = "Clocky Timesheet";
pub const SHEET_TITLE: &str = "Timesheet";

/// Document id callers send when they want a new spreadsheet provisioned.
pub const NEW_DOCUMENT_SENTINEL: &str = "-1";

pub const HEADER_ROW: u32 = 1;
pub const FIRST_DATA_ROW: u32 = 2;

pub const FORMAT_REMINDER: &str = "NOTE: You must currently change column E to duration number format as well as the 'total' cell";

/// Row 1, columns A through G.
pub const HEADER: [&str; 7] = ["Date", "In", "Out", "", "Total", "", FORMAT_REMINDER];

/// A1 notation range on a single sheet. `end_row: None` means the range runs
/// to the bottom of the sheet (`Timesheet!A2:E`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SheetRange {
    pub sheet: String,
    pub start_column: char,
    pub start_row: u32,
    pub end_column: char,
    pub end_row: Option<u32>,
}

impl SheetRange {
    pub fn bounded(
        sheet: impl Into<String>,
        start_column: char,
        start_row: u32,
        end_column: char,
        end_row: u32,
    ) -> Self {
        Self {
            sheet: sheet.into(),
            start_column,
            start_row,
            end_column,
            end_row: Some(end_row),
        }
    }

    pub fn open_ended(
        sheet: impl Into<String>,
        start_column: char,
        start_row: u32,
        end_column: char,
    ) -> Self {
        Self {
            sheet: sheet.into(),
            start_column,
            start_row,
            end_column,
            end_row: None,
        }
    }

    /// Single row spanning `start_column..=end_column` on the timesheet.
    pub fn timesheet_row(start_column: char, end_column: char, row: u32) -> Self {
        Self::bounded(SHEET_TITLE, start_column, row, end_column, row)
    }

    /// Zero-based column offsets covered by the range.
    pub fn column_span(&self) -> (usize, usize) {
        (column_index(self.start_column), column_index(self.end_column))
    }

    pub fn width(&self) -> usize {
        let (start, end) = self.column_span();
        end - start + 1
    }
}

impl fmt::Display for SheetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}!{}{}:{}",
            self.sheet, self.start_column, self.start_row, self.end_column
        )?;
        if let Some(end_row) = self.end_row {
            write!(f, "{end_row}")?;
        }
        Ok(())
    }
}

pub fn column_index(column: char) -> usize {
    (column.to_ascii_uppercase() as u8).saturating_sub(b'A') as usize
}

/// Range the clock-in append targets; the backend places the values after the
/// last occupied row.
pub fn clock_in_range() -> SheetRange {
    SheetRange::timesheet_row('A', 'B', HEADER_ROW)
}

/// Clock-out columns of one data row.
pub fn clock_out_range(row: u32) -> SheetRange {
    SheetRange::timesheet_row('C', 'E', row)
}

/// Columns whose occupied rows count as recorded shifts.
pub fn completed_shifts_range() -> SheetRange {
    SheetRange::open_ended(SHEET_TITLE, 'C', FIRST_DATA_ROW, 'E')
}

pub fn data_range() -> SheetRange {
    SheetRange::open_ended(SHEET_TITLE, 'A', FIRST_DATA_ROW, 'E')
}

pub fn header_range() -> SheetRange {
    SheetRange::timesheet_row('A', 'G', HEADER_ROW)
}

pub fn metadata_range() -> SheetRange {
    SheetRange::bounded(SHEET_TITLE, 'G', 2, 'H', 4)
}
