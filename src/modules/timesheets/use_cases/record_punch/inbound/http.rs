use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use serde::Deserialize;

use crate::modules::timesheets::core::shift::{ShiftEvent, ShiftKind};
use crate::modules::timesheets::core::timestamp::RawTimestamp;
use crate::modules::timesheets::use_cases::acknowledgement::Acknowledgement;
use crate::modules::timesheets::use_cases::application_error::ApplicationError;
use crate::modules::timesheets::use_cases::record_punch::command::RecordPunch;
use crate::shared::infrastructure::credentials::OAuthToken;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PunchBody {
    pub token: OAuthToken,
    pub timestamp: RawTimestamp,
    #[serde(alias = "docId")]
    pub doc_id: String,
}

pub async fn clock_in(
    State(state): State<AppState>,
    body: Result<Json<PunchBody>, JsonRejection>,
) -> Response {
    handle(state, body, ShiftKind::ClockIn).await
}

pub async fn clock_out(
    State(state): State<AppState>,
    body: Result<Json<PunchBody>, JsonRejection>,
) -> Response {
    handle(state, body, ShiftKind::ClockOut).await
}

async fn handle(
    state: AppState,
    body: Result<Json<PunchBody>, JsonRejection>,
    kind: ShiftKind,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return ApplicationError::from(rejection).into_response(),
    };

    let timestamp = match body.timestamp.parse() {
        Ok(t) => t,
        Err(e) => return ApplicationError::from(e).into_response(),
    };
    let event = match kind {
        ShiftKind::ClockIn => ShiftEvent::clock_in(timestamp),
        ShiftKind::ClockOut => ShiftEvent::clock_out(timestamp),
    };
    let command = RecordPunch {
        document_id: body.doc_id,
        event,
    };

    match state.record_punch_handler.handle(&body.token, command).await {
        Ok(recorded) => (
            StatusCode::OK,
            Json(Acknowledgement::new(
                success_message(recorded.kind),
                recorded.document_id,
            )),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub fn success_message(kind: ShiftKind) -> &'static str {
    match kind {
        ShiftKind::ClockIn => "Successfully clocked in",
        ShiftKind::ClockOut => "Successfully clocked out",
    }
}
