// Port to the remote spreadsheet backend.
//
// Every call carries the caller's credentials; the service holds no tokens of
// its own. Faults come back as the remote `{code, message}` pair and are
// relayed to the caller without interpretation.

pub mod google_sheets;
pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::timesheets::core::layout::{SheetRange, completed_shifts_range};
use crate::modules::timesheets::core::row_write::{CellValues, RowWrite};
use crate::shared::infrastructure::credentials::Credentials;

/// Status used when the remote API could not be reached at all.
pub const TRANSPORT_FAILURE_CODE: u16 = 502;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("remote api error {code}: {message}")]
pub struct SheetsError {
    pub code: u16,
    pub message: String,
}

impl SheetsError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(TRANSPORT_FAILURE_CODE, message)
    }
}

#[async_trait]
pub trait SpreadsheetClient: Send + Sync {
    /// Rows of `range` from its first row down to the last row holding any
    /// value, with trailing blank cells trimmed.
    async fn read_values(
        &self,
        credentials: &Credentials,
        document_id: &str,
        range: &SheetRange,
    ) -> Result<CellValues, SheetsError>;

    async fn write_append(
        &self,
        credentials: &Credentials,
        document_id: &str,
        range: &SheetRange,
        rows: &CellValues,
    ) -> Result<(), SheetsError>;

    async fn write_update(
        &self,
        credentials: &Credentials,
        document_id: &str,
        range: &SheetRange,
        rows: &CellValues,
    ) -> Result<(), SheetsError>;

    async fn clear_range(
        &self,
        credentials: &Credentials,
        document_id: &str,
        range: &SheetRange,
    ) -> Result<(), SheetsError>;

    async fn create_document(
        &self,
        credentials: &Credentials,
        title: &str,
        sheet_titles: &[&str],
    ) -> Result<String, SheetsError>;

    /// Data rows (header excluded) that already carry a clock-out.
    async fn read_row_count(
        &self,
        credentials: &Credentials,
        document_id: &str,
    ) -> Result<usize, SheetsError> {
        let values = self
            .read_values(credentials, document_id, &completed_shifts_range())
            .await?;
        Ok(values.len())
    }

    async fn execute(
        &self,
        credentials: &Credentials,
        document_id: &str,
        write: &RowWrite,
    ) -> Result<(), SheetsError> {
        match write {
            RowWrite::Append { range, values } => {
                self.write_append(credentials, document_id, range, values)
                    .await
            }
            RowWrite::Update { range, values } => {
                self.write_update(credentials, document_id, range, values)
                    .await
            }
        }
    }
}
