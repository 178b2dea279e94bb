// Google Sheets v4 implementation of the SpreadsheetClient port.
//
// Talks to the `spreadsheets` and `spreadsheets.values` REST resources with
// the caller's bearer token. Values are written with
// `valueInputOption=USER_ENTERED` so dates, times and formulas are parsed by
// the spreadsheet. Remote faults keep the `{code, message}` Google returns.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::modules::timesheets::core::layout::SheetRange;
use crate::modules::timesheets::core::row_write::CellValues;
use crate::shared::infrastructure::credentials::Credentials;
use crate::shared::infrastructure::spreadsheet_client::{SheetsError, SpreadsheetClient};

pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

const VALUE_INPUT_OPTION: (&str, &str) = ("valueInputOption", "USER_ENTERED");

#[derive(Debug, Clone)]
pub struct GoogleSheetsClient {
    http: Client,
    base_url: Url,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueRangeBody<'a> {
    range: String,
    major_dimension: &'static str,
    values: &'a CellValues,
}

#[derive(Deserialize)]
struct ValueRangeResponse {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Serialize)]
struct Properties<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct SheetBody<'a> {
    properties: Properties<'a>,
}

#[derive(Serialize)]
struct CreateSpreadsheetBody<'a> {
    properties: Properties<'a>,
    sheets: Vec<SheetBody<'a>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSpreadsheetResponse {
    spreadsheet_id: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: Option<u16>,
    message: String,
}

impl GoogleSheetsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SheetsError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SheetsError::transport(format!("invalid base url {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(SheetsError::transport(format!(
                "base url {base_url} cannot carry a path"
            )));
        }
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SheetsError::transport(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn values_url(&self, document_id: &str, range: &SheetRange, action: Option<&str>) -> Url {
        let target = match action {
            Some(action) => format!("{range}:{action}"),
            None => range.to_string(),
        };
        self.url(&["v4", "spreadsheets", document_id, "values", &target])
    }

    async fn send(
        &self,
        credentials: &Credentials,
        request: RequestBuilder,
    ) -> Result<Response, SheetsError> {
        let response = request
            .bearer_auth(credentials.bearer_token())
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "sheets request failed before a response");
                SheetsError::transport(e.to_string())
            })?;
        let status = response.status();
        debug!(%status, url = %response.url(), "sheets response");
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let error = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => SheetsError::new(
                envelope.error.code.unwrap_or(status.as_u16()),
                envelope.error.message,
            ),
            Err(_) => SheetsError::new(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown error"),
            ),
        };
        warn!(code = error.code, message = %error.message, "sheets api fault");
        Err(error)
    }
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[async_trait]
impl SpreadsheetClient for GoogleSheetsClient {
    async fn read_values(
        &self,
        credentials: &Credentials,
        document_id: &str,
        range: &SheetRange,
    ) -> Result<CellValues, SheetsError> {
        let request = self.http.get(self.values_url(document_id, range, None));
        let response = self.send(credentials, request).await?;
        let body: ValueRangeResponse = response
            .json()
            .await
            .map_err(|e| SheetsError::transport(format!("malformed values response: {e}")))?;
        Ok(body
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect())
    }

    async fn write_append(
        &self,
        credentials: &Credentials,
        document_id: &str,
        range: &SheetRange,
        rows: &CellValues,
    ) -> Result<(), SheetsError> {
        let request = self
            .http
            .post(self.values_url(document_id, range, Some("append")))
            .query(&[VALUE_INPUT_OPTION])
            .json(&ValueRangeBody {
                range: range.to_string(),
                major_dimension: "ROWS",
                values: rows,
            });
        self.send(credentials, request).await?;
        Ok(())
    }

    async fn write_update(
        &self,
        credentials: &Credentials,
        document_id: &str,
        range: &SheetRange,
        rows: &CellValues,
    ) -> Result<(), SheetsError> {
        let request = self
            .http
            .put(self.values_url(document_id, range, None))
            .query(&[VALUE_INPUT_OPTION])
            .json(&ValueRangeBody {
                range: range.to_string(),
                major_dimension: "ROWS",
                values: rows,
            });
        self.send(credentials, request).await?;
        Ok(())
    }

    async fn clear_range(
        &self,
        credentials: &Credentials,
        document_id: &str,
        range: &SheetRange,
    ) -> Result<(), SheetsError> {
        let request = self
            .http
            .post(self.values_url(document_id, range, Some("clear")))
            .json(&serde_json::json!({}));
        self.send(credentials, request).await?;
        Ok(())
    }

    async fn create_document(
        &self,
        credentials: &Credentials,
        title: &str,
        sheet_titles: &[&str],
    ) -> Result<String, SheetsError> {
        let request = self
            .http
            .post(self.url(&["v4", "spreadsheets"]))
            .json(&CreateSpreadsheetBody {
                properties: Properties { title },
                sheets: sheet_titles
                    .iter()
                    .map(|title| SheetBody {
                        properties: Properties { title },
                    })
                    .collect(),
            });
        let response = self.send(credentials, request).await?;
        let created: CreateSpreadsheetResponse = response
            .json()
            .await
            .map_err(|e| SheetsError::transport(format!("malformed create response: {e}")))?;
        Ok(created.spreadsheet_id)
    }
}
