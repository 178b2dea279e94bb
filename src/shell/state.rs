use std::sync::Arc;

use crate::modules::timesheets::core::engine::ReconciliationEngine;
use crate::modules::timesheets::use_cases::create_spreadsheet::handler::CreateSpreadsheetHandler;
use crate::modules::timesheets::use_cases::export_timesheet::handler::ExportTimesheetHandler;
use crate::modules::timesheets::use_cases::record_punch::handler::RecordPunchHandler;
use crate::modules::timesheets::use_cases::record_punch::policy::ClockOutPolicy;
use crate::shared::infrastructure::spreadsheet_client::SpreadsheetClient;

#[derive(Clone)]
pub struct AppState {
    pub record_punch_handler: Arc<RecordPunchHandler>,
    pub export_timesheet_handler: Arc<ExportTimesheetHandler>,
    pub create_spreadsheet_handler: Arc<CreateSpreadsheetHandler>,
}

impl AppState {
    pub fn new(
        client: Arc<dyn SpreadsheetClient>,
        engine: ReconciliationEngine,
        policy: ClockOutPolicy,
    ) -> Self {
        Self {
            record_punch_handler: Arc::new(RecordPunchHandler::new(
                engine,
                client.clone(),
                policy,
            )),
            export_timesheet_handler: Arc::new(ExportTimesheetHandler::new(
                engine,
                client.clone(),
            )),
            create_spreadsheet_handler: Arc::new(CreateSpreadsheetHandler::new(engine, client)),
        }
    }
}
