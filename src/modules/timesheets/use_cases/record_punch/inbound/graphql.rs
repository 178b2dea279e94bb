use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::timesheets::core::shift::ShiftEvent;
use crate::modules::timesheets::core::timestamp::RawTimestamp;
use crate::modules::timesheets::use_cases::acknowledgement::Acknowledgement;
use crate::modules::timesheets::use_cases::application_error::ApplicationError;
use crate::modules::timesheets::use_cases::graphql_types::GqlOAuthToken;
use crate::modules::timesheets::use_cases::record_punch::command::RecordPunch;
use crate::modules::timesheets::use_cases::record_punch::inbound::http::success_message;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RecordPunchMutation;

async fn record(
    context: &Context<'_>,
    token: GqlOAuthToken,
    timestamp: String,
    doc_id: String,
    to_event: fn(chrono::DateTime<chrono::Utc>) -> ShiftEvent,
) -> GqlResult<Acknowledgement> {
    let state = context.data_unchecked::<AppState>();
    let timestamp = RawTimestamp::Text(timestamp)
        .parse()
        .map_err(|e| ApplicationError::from(e).extend())?;
    let command = RecordPunch {
        document_id: doc_id,
        event: to_event(timestamp),
    };
    let recorded = state
        .record_punch_handler
        .handle(&token.into(), command)
        .await
        .map_err(|e| e.extend())?;
    Ok(Acknowledgement::new(
        success_message(recorded.kind),
        recorded.document_id,
    ))
}

#[Object]
impl RecordPunchMutation {
    /// `timestamp` is epoch milliseconds or an ISO-8601 string.
    async fn clock_in(
        &self,
        context: &Context<'_>,
        token: GqlOAuthToken,
        timestamp: String,
        doc_id: String,
    ) -> GqlResult<Acknowledgement> {
        record(context, token, timestamp, doc_id, ShiftEvent::clock_in).await
    }

    async fn clock_out(
        &self,
        context: &Context<'_>,
        token: GqlOAuthToken,
        timestamp: String,
        doc_id: String,
    ) -> GqlResult<Acknowledgement> {
        record(context, token, timestamp, doc_id, ShiftEvent::clock_out).await
    }
}
