use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::modules::timesheets::core::engine::ReconciliationEngine;
use crate::modules::timesheets::core::layout::SheetRange;
use crate::modules::timesheets::core::shift::ShiftKind;
use crate::modules::timesheets::use_cases::application_error::ApplicationError;
use crate::modules::timesheets::use_cases::record_punch::command::RecordPunch;
use crate::modules::timesheets::use_cases::record_punch::policy::ClockOutPolicy;
use crate::shared::infrastructure::credentials::{Credentials, OAuthToken, authorize};
use crate::shared::infrastructure::spreadsheet_client::SpreadsheetClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunchRecorded {
    pub kind: ShiftKind,
    pub document_id: String,
    /// Row the clock-out updated; clock-in rows are placed by the backend.
    pub row: Option<u32>,
}

pub struct RecordPunchHandler {
    engine: ReconciliationEngine,
    client: Arc<dyn SpreadsheetClient>,
    policy: ClockOutPolicy,
}

impl RecordPunchHandler {
    pub fn new(
        engine: ReconciliationEngine,
        client: Arc<dyn SpreadsheetClient>,
        policy: ClockOutPolicy,
    ) -> Self {
        Self {
            engine,
            client,
            policy,
        }
    }

    pub async fn handle(
        &self,
        token: &OAuthToken,
        command: RecordPunch,
    ) -> Result<PunchRecorded, ApplicationError> {
        let credentials = authorize(token, Utc::now())?;
        match command.event.kind {
            ShiftKind::ClockIn => self.clock_in(&credentials, command).await,
            ShiftKind::ClockOut => self.clock_out(&credentials, command).await,
        }
    }

    async fn clock_in(
        &self,
        credentials: &Credentials,
        command: RecordPunch,
    ) -> Result<PunchRecorded, ApplicationError> {
        let write = self.engine.plan_clock_in(command.event.timestamp);
        self.client
            .execute(credentials, &command.document_id, &write)
            .await?;
        info!(doc_id = %command.document_id, "clocked in");
        Ok(PunchRecorded {
            kind: ShiftKind::ClockIn,
            document_id: command.document_id,
            row: None,
        })
    }

    // Reading the count and writing the row are two separate remote calls;
    // concurrent clock-outs on one document can land on the same row.
    async fn clock_out(
        &self,
        credentials: &Credentials,
        command: RecordPunch,
    ) -> Result<PunchRecorded, ApplicationError> {
        let current_row_count = self
            .client
            .read_row_count(credentials, &command.document_id)
            .await?;
        let row = ReconciliationEngine::clock_out_row(current_row_count);
        if self.policy == ClockOutPolicy::Strict {
            self.ensure_clocked_in(credentials, &command.document_id, row)
                .await?;
        }
        let write = self
            .engine
            .plan_clock_out(command.event.timestamp, current_row_count);
        self.client
            .execute(credentials, &command.document_id, &write)
            .await?;
        info!(doc_id = %command.document_id, row, "clocked out");
        Ok(PunchRecorded {
            kind: ShiftKind::ClockOut,
            document_id: command.document_id,
            row: Some(row),
        })
    }

    async fn ensure_clocked_in(
        &self,
        credentials: &Credentials,
        document_id: &str,
        row: u32,
    ) -> Result<(), ApplicationError> {
        let clock_in_cell = SheetRange::timesheet_row('B', 'B', row);
        let values = self
            .client
            .read_values(credentials, document_id, &clock_in_cell)
            .await?;
        let clocked_in = values
            .first()
            .and_then(|cells| cells.first())
            .is_some_and(|cell| !cell.is_empty());
        if clocked_in {
            Ok(())
        } else {
            Err(ApplicationError::Validation(format!(
                "clock out without a prior clock in (row {row})"
            )))
        }
    }
}

#[cfg(test)]
mod record_punch_handler_tests {
    use super::*;
    use crate::modules::timesheets::core::formulas::duration_formula;
    use crate::modules::timesheets::core::layout::SHEET_TITLE;
    use crate::modules::timesheets::core::row_write::RowWrite;
    use crate::modules::timesheets::core::shift::ShiftEvent;
    use crate::shared::infrastructure::credentials::CredentialError;
    use crate::shared::infrastructure::spreadsheet_client::SheetsError;
    use crate::shared::infrastructure::spreadsheet_client::in_memory::InMemorySpreadsheetClient;
    use crate::tests::fixtures::credentials::valid_token;
    use crate::tests::fixtures::instants::{five_pm, nine_am};
    use rstest::rstest;

    const DOC: &str = "doc-0001";

    async fn sheet() -> Arc<InMemorySpreadsheetClient> {
        let client = InMemorySpreadsheetClient::new();
        client.insert_document(DOC, &[SHEET_TITLE]).await;
        Arc::new(client)
    }

    fn handler(client: Arc<InMemorySpreadsheetClient>, policy: ClockOutPolicy) -> RecordPunchHandler {
        RecordPunchHandler::new(ReconciliationEngine::default(), client, policy)
    }

    fn punch(event: ShiftEvent) -> RecordPunch {
        RecordPunch {
            document_id: DOC.to_string(),
            event,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_append_the_clock_in() {
        let client = sheet().await;
        let outcome = handler(client.clone(), ClockOutPolicy::Lenient)
            .handle(&valid_token(), punch(ShiftEvent::clock_in(nine_am())))
            .await
            .expect("clock in failed");

        assert_eq!(outcome.kind, ShiftKind::ClockIn);
        assert_eq!(outcome.row, None);
        assert_eq!(client.cell(DOC, SHEET_TITLE, 'A', 1).await, "10/17/2026");
        assert_eq!(client.cell(DOC, SHEET_TITLE, 'B', 1).await, "9:00:00 AM");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_clock_out_on_row_two_of_an_empty_sheet_when_lenient() {
        let client = sheet().await;
        let outcome = handler(client.clone(), ClockOutPolicy::Lenient)
            .handle(&valid_token(), punch(ShiftEvent::clock_out(five_pm())))
            .await
            .expect("clock out failed");

        assert_eq!(outcome.row, Some(2));
        assert_eq!(client.cell(DOC, SHEET_TITLE, 'C', 2).await, "5:00:00 PM");
        assert_eq!(client.cell(DOC, SHEET_TITLE, 'E', 2).await, duration_formula(2));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_a_clock_out_without_clock_in_when_strict() {
        let client = sheet().await;
        let result = handler(client.clone(), ClockOutPolicy::Strict)
            .handle(&valid_token(), punch(ShiftEvent::clock_out(five_pm())))
            .await;

        assert!(matches!(result, Err(ApplicationError::Validation(_))));
        assert_eq!(client.cell(DOC, SHEET_TITLE, 'C', 2).await, "");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_accept_a_clock_out_after_clock_in_when_strict() {
        let client = sheet().await;
        let handler = handler(client.clone(), ClockOutPolicy::Strict);
        let header = RowWrite::Append {
            range: SheetRange::timesheet_row('A', 'B', 1),
            values: vec![vec!["Date".to_string(), "In".to_string()]],
        };
        client
            .execute(&authorize(&valid_token(), Utc::now()).unwrap(), DOC, &header)
            .await
            .unwrap();
        handler
            .handle(&valid_token(), punch(ShiftEvent::clock_in(nine_am())))
            .await
            .unwrap();

        let outcome = handler
            .handle(&valid_token(), punch(ShiftEvent::clock_out(five_pm())))
            .await
            .expect("clock out failed");
        assert_eq!(outcome.row, Some(2));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_invalid_credentials_before_calling_the_backend() {
        let mut client = InMemorySpreadsheetClient::new();
        client.toggle_offline();
        let handler = handler(Arc::new(client), ClockOutPolicy::Lenient);
        let result = handler
            .handle(&OAuthToken::default(), punch(ShiftEvent::clock_in(nine_am())))
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Credential(CredentialError::MissingAccessToken))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_relay_backend_faults() {
        let handler = handler(Arc::new(InMemorySpreadsheetClient::new()), ClockOutPolicy::Lenient);
        let result = handler
            .handle(&valid_token(), punch(ShiftEvent::clock_out(five_pm())))
            .await;

        match result {
            Err(ApplicationError::Remote(SheetsError { code, message })) => {
                assert_eq!(code, 404);
                assert_eq!(message, "Requested entity was not found.");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
