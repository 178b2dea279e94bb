use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::timesheets::use_cases::create_spreadsheet::inbound::http as create_http;
use crate::modules::timesheets::use_cases::export_timesheet::inbound::http as export_http;
use crate::modules::timesheets::use_cases::record_punch::inbound::http as punch_http;
use crate::shell::graphql::{AppSchema, GRAPHQL_PATH, graphiql, graphql};
use crate::shell::state::AppState;

async fn health() -> &'static str {
    "ok"
}

pub fn router(state: AppState, schema: AppSchema) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/clock-in", post(punch_http::clock_in))
        .route("/clock-out", post(punch_http::clock_out))
        .route("/export-timesheet", post(export_http::handle))
        .route("/create-spreadsheet", post(create_http::handle))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
