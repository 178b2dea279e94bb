use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::modules::timesheets::core::formulas::duration_formula;
use crate::modules::timesheets::core::layout::SHEET_TITLE;
use crate::shell::graphql::build_schema;
use crate::shell::http::router;
use crate::tests::fixtures::instants::{at, five_pm, nine_am};
use crate::tests::fixtures::state::make_test_state;

fn app(state: crate::shell::state::AppState) -> Router {
    router(state.clone(), build_schema(state))
}

async fn post(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::post(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn token() -> Value {
    json!({ "access_token": "ya29.e2e", "token_type": "Bearer" })
}

#[tokio::test]
async fn creates_a_spreadsheet_and_records_two_days_of_punches() {
    let (state, client) = make_test_state().await;
    let app = app(state);

    let (status, created) = post(
        &app,
        "/create-spreadsheet",
        json!({ "token": token(), "docId": "-1" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let doc = created["docId"].as_str().unwrap().to_string();

    let punches = [
        ("/clock-in", nine_am(), "Successfully clocked in"),
        ("/clock-out", five_pm(), "Successfully clocked out"),
        ("/clock-in", at(9, 30) + chrono::Duration::days(1), "Successfully clocked in"),
        ("/clock-out", at(16, 45) + chrono::Duration::days(1), "Successfully clocked out"),
    ];
    for (path, instant, message) in punches {
        let (status, ack) = post(
            &app,
            path,
            json!({ "token": token(), "timestamp": instant.timestamp_millis(), "docId": doc }),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{path} at {instant}");
        assert_eq!(ack["message"], message);
        assert_eq!(ack["docId"], doc.as_str());
    }

    assert_eq!(client.cell(&doc, SHEET_TITLE, 'A', 1).await, "Date");
    assert_eq!(client.cell(&doc, SHEET_TITLE, 'A', 2).await, "10/17/2026");
    assert_eq!(client.cell(&doc, SHEET_TITLE, 'B', 2).await, "9:00:00 AM");
    assert_eq!(client.cell(&doc, SHEET_TITLE, 'C', 2).await, "5:00:00 PM");
    assert_eq!(client.cell(&doc, SHEET_TITLE, 'E', 2).await, duration_formula(2));
    assert_eq!(client.cell(&doc, SHEET_TITLE, 'A', 3).await, "10/18/2026");
    assert_eq!(client.cell(&doc, SHEET_TITLE, 'B', 3).await, "9:30:00 AM");
    assert_eq!(client.cell(&doc, SHEET_TITLE, 'C', 3).await, "4:45:00 PM");
    assert_eq!(client.cell(&doc, SHEET_TITLE, 'E', 3).await, duration_formula(3));
    assert_eq!(client.cell(&doc, SHEET_TITLE, 'G', 4).await, "Total Time:");
}

#[tokio::test]
async fn export_replaces_punched_rows_with_the_supplied_shifts() {
    let (state, client) = make_test_state().await;
    let app = app(state);

    let (status, created) = post(
        &app,
        "/create-spreadsheet",
        json!({ "token": token(), "doc_id": "-1" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let doc = created["docId"].as_str().unwrap().to_string();

    for path in ["/clock-in", "/clock-out", "/clock-in"] {
        let (status, _) = post(
            &app,
            path,
            json!({ "token": token(), "timestamp": "2026-10-16T08:00:00Z", "doc_id": doc }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, ack) = post(
        &app,
        "/export-timesheet",
        json!({
            "token": token(),
            "docId": doc,
            "shifts": [
                { "clockIn": nine_am().timestamp_millis(), "clockOut": five_pm().timestamp_millis() },
                { "clockIn": "2026-10-18T10:15:00Z" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack["message"], "Successfully exported to Sheets");
    assert_eq!(client.cell(&doc, SHEET_TITLE, 'A', 2).await, "10/17/2026");
    assert_eq!(client.cell(&doc, SHEET_TITLE, 'C', 2).await, "5:00:00 PM");
    assert_eq!(client.cell(&doc, SHEET_TITLE, 'E', 2).await, duration_formula(2));
    assert_eq!(client.cell(&doc, SHEET_TITLE, 'A', 3).await, "10/18/2026");
    assert_eq!(client.cell(&doc, SHEET_TITLE, 'B', 3).await, "10:15:00 AM");
    assert_eq!(client.cell(&doc, SHEET_TITLE, 'C', 3).await, "");
    assert_eq!(client.cell(&doc, SHEET_TITLE, 'E', 3).await, duration_formula(3));
    assert_eq!(client.cell(&doc, SHEET_TITLE, 'A', 1).await, "Date");
    assert!(client.cell(&doc, SHEET_TITLE, 'H', 4).await.starts_with("=SUMIFS"));
}

#[tokio::test]
async fn relays_remote_faults_for_unknown_documents() {
    let (state, _client) = make_test_state().await;
    let app = app(state);

    let (status, body) = post(
        &app,
        "/clock-in",
        json!({ "token": token(), "timestamp": nine_am().timestamp_millis(), "docId": "missing" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "Requested entity was not found.");
}
