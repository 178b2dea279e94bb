use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use serde::Deserialize;

use crate::modules::timesheets::core::shift::Shift;
use crate::modules::timesheets::core::timestamp::{RawTimestamp, TimestampError};
use crate::modules::timesheets::use_cases::acknowledgement::Acknowledgement;
use crate::modules::timesheets::use_cases::application_error::ApplicationError;
use crate::modules::timesheets::use_cases::export_timesheet::command::ExportTimesheet;
use crate::shared::infrastructure::credentials::OAuthToken;
use crate::shell::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Successfully exported to Sheets";

#[derive(Deserialize)]
pub struct ShiftBody {
    #[serde(alias = "clockIn")]
    pub clock_in: RawTimestamp,
    #[serde(default, alias = "clockOut")]
    pub clock_out: Option<RawTimestamp>,
}

impl TryFrom<ShiftBody> for Shift {
    type Error = TimestampError;

    fn try_from(body: ShiftBody) -> Result<Self, Self::Error> {
        let clock_in = body.clock_in.parse()?;
        let clock_out = body.clock_out.map(|raw| raw.parse()).transpose()?;
        Ok(Shift::new(clock_in, clock_out))
    }
}

#[derive(Deserialize)]
pub struct ExportTimesheetBody {
    pub token: OAuthToken,
    pub shifts: Vec<ShiftBody>,
    #[serde(alias = "docId")]
    pub doc_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ExportTimesheetBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return ApplicationError::from(rejection).into_response(),
    };

    let shifts = match body
        .shifts
        .into_iter()
        .map(Shift::try_from)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(shifts) => shifts,
        Err(e) => return ApplicationError::from(e).into_response(),
    };
    let command = ExportTimesheet {
        document_id: body.doc_id,
        shifts,
    };

    match state.export_timesheet_handler.handle(&body.token, command).await {
        Ok(exported) => (
            StatusCode::OK,
            Json(Acknowledgement::new(SUCCESS_MESSAGE, exported.document_id)),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
