use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::timesheets::core::shift::Shift;
use crate::modules::timesheets::core::timestamp::{RawTimestamp, TimestampError};
use crate::modules::timesheets::use_cases::acknowledgement::Acknowledgement;
use crate::modules::timesheets::use_cases::application_error::ApplicationError;
use crate::modules::timesheets::use_cases::export_timesheet::command::ExportTimesheet;
use crate::modules::timesheets::use_cases::export_timesheet::inbound::http::SUCCESS_MESSAGE;
use crate::modules::timesheets::use_cases::graphql_types::{GqlOAuthToken, GqlShiftInput};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ExportTimesheetMutation;

fn to_shift(input: GqlShiftInput) -> Result<Shift, TimestampError> {
    let clock_in = RawTimestamp::Text(input.clock_in).parse()?;
    let clock_out = input
        .clock_out
        .map(|raw| RawTimestamp::Text(raw).parse())
        .transpose()?;
    Ok(Shift::new(clock_in, clock_out))
}

#[Object]
impl ExportTimesheetMutation {
    async fn export_timesheet(
        &self,
        context: &Context<'_>,
        token: GqlOAuthToken,
        shifts: Vec<GqlShiftInput>,
        doc_id: String,
    ) -> GqlResult<Acknowledgement> {
        let state = context.data_unchecked::<AppState>();
        let shifts = shifts
            .into_iter()
            .map(to_shift)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ApplicationError::from(e).extend())?;
        let command = ExportTimesheet {
            document_id: doc_id,
            shifts,
        };
        let exported = state
            .export_timesheet_handler
            .handle(&token.into(), command)
            .await
            .map_err(|e| e.extend())?;
        Ok(Acknowledgement::new(SUCCESS_MESSAGE, exported.document_id))
    }
}
