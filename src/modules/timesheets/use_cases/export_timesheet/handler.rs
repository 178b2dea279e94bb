use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::modules::timesheets::core::engine::ReconciliationEngine;
use crate::modules::timesheets::use_cases::application_error::ApplicationError;
use crate::modules::timesheets::use_cases::export_timesheet::command::ExportTimesheet;
use crate::shared::infrastructure::credentials::{OAuthToken, authorize};
use crate::shared::infrastructure::spreadsheet_client::SpreadsheetClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimesheetExported {
    pub document_id: String,
    pub rows_written: usize,
}

pub struct ExportTimesheetHandler {
    engine: ReconciliationEngine,
    client: Arc<dyn SpreadsheetClient>,
}

impl ExportTimesheetHandler {
    pub fn new(engine: ReconciliationEngine, client: Arc<dyn SpreadsheetClient>) -> Self {
        Self { engine, client }
    }

    pub async fn handle(
        &self,
        token: &OAuthToken,
        command: ExportTimesheet,
    ) -> Result<TimesheetExported, ApplicationError> {
        let credentials = authorize(token, Utc::now())?;
        let plan = self.engine.plan_export(&command.shifts);

        self.client
            .clear_range(&credentials, &command.document_id, &plan.clear)
            .await?;
        if !plan.rows.is_empty() {
            self.client
                .execute(&credentials, &command.document_id, &plan.write())
                .await?;
        }

        info!(doc_id = %command.document_id, rows = plan.rows.len(), "exported timesheet");
        Ok(TimesheetExported {
            document_id: command.document_id,
            rows_written: plan.rows.len(),
        })
    }
}
