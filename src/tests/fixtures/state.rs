use std::sync::Arc;

use crate::modules::timesheets::core::engine::ReconciliationEngine;
use crate::modules::timesheets::core::layout::SHEET_TITLE;
use crate::modules::timesheets::use_cases::record_punch::policy::ClockOutPolicy;
use crate::shared::infrastructure::spreadsheet_client::in_memory::InMemorySpreadsheetClient;
use crate::shell::state::AppState;

pub const TEST_DOC: &str = "doc-under-test";

pub async fn make_test_state() -> (AppState, Arc<InMemorySpreadsheetClient>) {
    make_test_state_with(ClockOutPolicy::Lenient).await
}

pub async fn make_test_state_with(
    policy: ClockOutPolicy,
) -> (AppState, Arc<InMemorySpreadsheetClient>) {
    let client = Arc::new(InMemorySpreadsheetClient::new());
    client.insert_document(TEST_DOC, &[SHEET_TITLE]).await;
    let state = AppState::new(client.clone(), ReconciliationEngine::default(), policy);
    (state, client)
}
