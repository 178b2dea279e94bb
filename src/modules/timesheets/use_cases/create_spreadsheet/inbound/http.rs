use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use serde::Deserialize;

use crate::modules::timesheets::use_cases::acknowledgement::Acknowledgement;
use crate::modules::timesheets::use_cases::application_error::ApplicationError;
use crate::modules::timesheets::use_cases::create_spreadsheet::command::CreateSpreadsheet;
use crate::shared::infrastructure::credentials::OAuthToken;
use crate::shell::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Spreadsheet successfully created";

#[derive(Deserialize)]
pub struct CreateSpreadsheetBody {
    pub token: OAuthToken,
    #[serde(alias = "docId")]
    pub doc_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateSpreadsheetBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return ApplicationError::from(rejection).into_response(),
    };

    let command = CreateSpreadsheet {
        document_id: body.doc_id,
    };
    match state
        .create_spreadsheet_handler
        .handle(&body.token, command)
        .await
    {
        Ok(ready) => (
            StatusCode::OK,
            Json(Acknowledgement::new(SUCCESS_MESSAGE, ready.document_id)),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
