use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult, SimpleObject};

use crate::modules::timesheets::core::layout::{
    HEADER, NEW_DOCUMENT_SENTINEL, SHEET_TITLE, data_range, metadata_range,
};
use crate::modules::timesheets::use_cases::acknowledgement::Acknowledgement;
use crate::modules::timesheets::use_cases::create_spreadsheet::command::CreateSpreadsheet;
use crate::modules::timesheets::use_cases::create_spreadsheet::inbound::http::SUCCESS_MESSAGE;
use crate::modules::timesheets::use_cases::graphql_types::GqlOAuthToken;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateSpreadsheetMutation;

#[Object]
impl CreateSpreadsheetMutation {
    /// Pass `"-1"` as `docId` to provision a new spreadsheet.
    async fn create_spreadsheet(
        &self,
        context: &Context<'_>,
        token: GqlOAuthToken,
        doc_id: String,
    ) -> GqlResult<Acknowledgement> {
        let state = context.data_unchecked::<AppState>();
        let ready = state
            .create_spreadsheet_handler
            .handle(
                &token.into(),
                CreateSpreadsheet {
                    document_id: doc_id,
                },
            )
            .await
            .map_err(|e| e.extend())?;
        Ok(Acknowledgement::new(SUCCESS_MESSAGE, ready.document_id))
    }
}

#[derive(SimpleObject)]
pub struct DocumentLayout {
    pub sheet_title: String,
    pub new_document_sentinel: String,
    pub header: Vec<String>,
    pub data_range: String,
    pub metadata_range: String,
}

#[derive(Default)]
pub struct DocumentLayoutQuery;

#[Object]
impl DocumentLayoutQuery {
    /// Column contract written into every timesheet.
    async fn document_layout(&self) -> DocumentLayout {
        DocumentLayout {
            sheet_title: SHEET_TITLE.to_string(),
            new_document_sentinel: NEW_DOCUMENT_SENTINEL.to_string(),
            header: HEADER
                .into_iter()
                .map(String::from)
                .collect(),
            data_range: data_range().to_string(),
            metadata_range: metadata_range().to_string(),
        }
    }
}
