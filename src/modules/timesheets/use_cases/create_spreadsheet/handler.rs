use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::modules::timesheets::core::engine::ReconciliationEngine;
use crate::modules::timesheets::core::layout::{DOCUMENT_TITLE, NEW_DOCUMENT_SENTINEL, SHEET_TITLE};
use crate::modules::timesheets::use_cases::application_error::ApplicationError;
use crate::modules::timesheets::use_cases::create_spreadsheet::command::CreateSpreadsheet;
use crate::shared::infrastructure::credentials::{OAuthToken, authorize};
use crate::shared::infrastructure::spreadsheet_client::SpreadsheetClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetReady {
    pub document_id: String,
}

pub struct CreateSpreadsheetHandler {
    engine: ReconciliationEngine,
    client: Arc<dyn SpreadsheetClient>,
}

impl CreateSpreadsheetHandler {
    pub fn new(engine: ReconciliationEngine, client: Arc<dyn SpreadsheetClient>) -> Self {
        Self { engine, client }
    }

    /// Existing documents pass through untouched; the sentinel provisions a new
    /// one with header and totals initialised.
    pub async fn handle(
        &self,
        token: &OAuthToken,
        command: CreateSpreadsheet,
    ) -> Result<SpreadsheetReady, ApplicationError> {
        let now = Utc::now();
        let credentials = authorize(token, now)?;
        if command.document_id != NEW_DOCUMENT_SENTINEL {
            return Ok(SpreadsheetReady {
                document_id: command.document_id,
            });
        }

        let document_id = self
            .client
            .create_document(&credentials, DOCUMENT_TITLE, &[SHEET_TITLE])
            .await?;
        let init = self.engine.plan_document_init(self.engine.today(now));
        self.client
            .execute(&credentials, &document_id, &init.header)
            .await?;
        self.client
            .execute(&credentials, &document_id, &init.metadata)
            .await?;

        info!(doc_id = %document_id, "created timesheet spreadsheet");
        Ok(SpreadsheetReady { document_id })
    }
}
