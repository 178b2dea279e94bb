// In memory implementation of the SpreadsheetClient port.
//
// Purpose
// - Support handler tests and local development without a Google account.
//
// Responsibilities
// - Keep one grid of string cells per sheet per document.
// - Mimic the append, update, clear and read semantics of the Sheets values API
//   closely enough for row targeting to be exercised end to end.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::modules::timesheets::core::layout::{SheetRange, column_index};
use crate::modules::timesheets::core::row_write::CellValues;
use crate::shared::infrastructure::credentials::Credentials;
use crate::shared::infrastructure::spreadsheet_client::{SheetsError, SpreadsheetClient};

#[derive(Debug, Default, Clone)]
struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    fn set(&mut self, row: usize, column: usize, value: String) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= column {
            cells.resize(column + 1, String::new());
        }
        cells[column] = value;
    }

    fn row_is_blank(&self, row: usize, first: usize, last: usize) -> bool {
        (first..=last).all(|column| self.cell(row, column).is_empty())
    }

    /// Zero-based index of the last row at or below `from` with a value in the
    /// given columns.
    fn last_occupied_row(&self, from: usize, first: usize, last: usize) -> Option<usize> {
        (from..self.rows.len())
            .rev()
            .find(|row| !self.row_is_blank(*row, first, last))
    }
}

type Document = HashMap<String, Grid>;

#[derive(Default)]
pub struct InMemorySpreadsheetClient {
    documents: Mutex<HashMap<String, Document>>,
    offline: bool,
}

impl InMemorySpreadsheetClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Registers an empty document under a known id.
    pub async fn insert_document(&self, document_id: &str, sheet_titles: &[&str]) {
        let document = sheet_titles
            .iter()
            .map(|title| (title.to_string(), Grid::default()))
            .collect();
        self.documents
            .lock()
            .await
            .insert(document_id.to_string(), document);
    }

    pub async fn document_exists(&self, document_id: &str) -> bool {
        self.documents.lock().await.contains_key(document_id)
    }

    /// Value of a single cell, `row` is 1-based like A1 notation.
    pub async fn cell(&self, document_id: &str, sheet: &str, column: char, row: u32) -> String {
        let documents = self.documents.lock().await;
        documents
            .get(document_id)
            .and_then(|document| document.get(sheet))
            .map(|grid| grid.cell(zero_based(row), column_index(column)).to_string())
            .unwrap_or_default()
    }

    fn ensure_online(&self) -> Result<(), SheetsError> {
        if self.offline {
            return Err(SheetsError::new(503, "The service is currently unavailable."));
        }
        Ok(())
    }

    async fn with_grid<T>(
        &self,
        document_id: &str,
        range: &SheetRange,
        apply: impl FnOnce(&mut Grid) -> Result<T, SheetsError>,
    ) -> Result<T, SheetsError> {
        self.ensure_online()?;
        let mut documents = self.documents.lock().await;
        let document = documents
            .get_mut(document_id)
            .ok_or_else(|| SheetsError::new(404, "Requested entity was not found."))?;
        let grid = document
            .get_mut(&range.sheet)
            .ok_or_else(|| SheetsError::new(400, format!("Unable to parse range: {range}")))?;
        apply(grid)
    }
}

fn zero_based(row: u32) -> usize {
    row.saturating_sub(1) as usize
}

fn write_block(grid: &mut Grid, top: usize, first_column: usize, rows: &CellValues) {
    for (offset, values) in rows.iter().enumerate() {
        for (column, value) in values.iter().enumerate() {
            grid.set(top + offset, first_column + column, value.clone());
        }
    }
}

fn check_fits(range: &SheetRange, top: usize, rows: &CellValues) -> Result<(), SheetsError> {
    let too_wide = rows.iter().any(|values| values.len() > range.width());
    let last_row = top + rows.len();
    let too_tall = range
        .end_row
        .is_some_and(|end_row| !rows.is_empty() && last_row > end_row as usize);
    if too_wide || too_tall {
        return Err(SheetsError::new(
            400,
            format!("Requested writing within range [{range}], but tried writing past its bounds"),
        ));
    }
    Ok(())
}

#[async_trait]
impl SpreadsheetClient for InMemorySpreadsheetClient {
    async fn read_values(
        &self,
        _credentials: &Credentials,
        document_id: &str,
        range: &SheetRange,
    ) -> Result<CellValues, SheetsError> {
        self.with_grid(document_id, range, |grid| {
            let (first, last) = range.column_span();
            let top = zero_based(range.start_row);
            let mut bottom = match grid.last_occupied_row(top, first, last) {
                Some(row) => row,
                None => return Ok(Vec::new()),
            };
            if let Some(end_row) = range.end_row {
                bottom = bottom.min(zero_based(end_row));
            }
            let values = (top..=bottom)
                .map(|row| {
                    let mut cells: Vec<String> = (first..=last)
                        .map(|column| grid.cell(row, column).to_string())
                        .collect();
                    while cells.last().is_some_and(String::is_empty) {
                        cells.pop();
                    }
                    cells
                })
                .collect();
            Ok(values)
        })
        .await
    }

    async fn write_append(
        &self,
        _credentials: &Credentials,
        document_id: &str,
        range: &SheetRange,
        rows: &CellValues,
    ) -> Result<(), SheetsError> {
        self.with_grid(document_id, range, |grid| {
            let (first, last) = range.column_span();
            let start = zero_based(range.start_row);
            let top = grid
                .last_occupied_row(start, first, last)
                .map_or(start, |row| row + 1);
            if rows.iter().any(|values| values.len() > range.width()) {
                return Err(SheetsError::new(
                    400,
                    format!("Requested writing within range [{range}], but tried writing past its bounds"),
                ));
            }
            write_block(grid, top, first, rows);
            Ok(())
        })
        .await
    }

    async fn write_update(
        &self,
        _credentials: &Credentials,
        document_id: &str,
        range: &SheetRange,
        rows: &CellValues,
    ) -> Result<(), SheetsError> {
        self.with_grid(document_id, range, |grid| {
            let top = zero_based(range.start_row);
            check_fits(range, top, rows)?;
            write_block(grid, top, column_index(range.start_column), rows);
            Ok(())
        })
        .await
    }

    async fn clear_range(
        &self,
        _credentials: &Credentials,
        document_id: &str,
        range: &SheetRange,
    ) -> Result<(), SheetsError> {
        self.with_grid(document_id, range, |grid| {
            let (first, last) = range.column_span();
            let top = zero_based(range.start_row);
            let bottom = range
                .end_row
                .map_or(grid.rows.len(), |end_row| (end_row as usize).min(grid.rows.len()));
            for row in top..bottom {
                for column in first..=last {
                    if !grid.cell(row, column).is_empty() {
                        grid.set(row, column, String::new());
                    }
                }
            }
            Ok(())
        })
        .await
    }

    async fn create_document(
        &self,
        _credentials: &Credentials,
        _title: &str,
        sheet_titles: &[&str],
    ) -> Result<String, SheetsError> {
        self.ensure_online()?;
        let document_id = Uuid::now_v7().to_string();
        self.insert_document(&document_id, sheet_titles).await;
        Ok(document_id)
    }
}
