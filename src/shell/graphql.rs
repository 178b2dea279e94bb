use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension,
    response::{Html, IntoResponse},
};

use crate::modules::timesheets::use_cases::create_spreadsheet::inbound::graphql::{
    CreateSpreadsheetMutation, DocumentLayoutQuery,
};
use crate::modules::timesheets::use_cases::export_timesheet::inbound::graphql::ExportTimesheetMutation;
use crate::modules::timesheets::use_cases::record_punch::inbound::graphql::RecordPunchMutation;
pub use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(DocumentLayoutQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    RecordPunchMutation,
    ExportTimesheetMutation,
    CreateSpreadsheetMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
