use async_graphql::ErrorExtensions;
use axum::{
    Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse,
    response::Response,
};
use serde::Serialize;
use thiserror::Error;

use crate::modules::timesheets::core::timestamp::TimestampError;
use crate::shared::infrastructure::credentials::CredentialError;
use crate::shared::infrastructure::spreadsheet_client::SheetsError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Remote(#[from] SheetsError),

    #[error("{0}")]
    Validation(String),
}

impl From<TimestampError> for ApplicationError {
    fn from(error: TimestampError) -> Self {
        ApplicationError::Validation(error.to_string())
    }
}

impl From<JsonRejection> for ApplicationError {
    fn from(rejection: JsonRejection) -> Self {
        ApplicationError::Validation(rejection.body_text())
    }
}

/// Error shape every inbound surface renders.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

impl ApplicationError {
    pub fn code(&self) -> u16 {
        match self {
            ApplicationError::Credential(_) => StatusCode::BAD_REQUEST.as_u16(),
            ApplicationError::Remote(error) => error.code,
            ApplicationError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
        }
    }

    /// Remote faults keep the backend's message untouched.
    pub fn message(&self) -> String {
        match self {
            ApplicationError::Remote(error) => error.message.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code())
            .ok()
            .filter(|status| status.is_client_error() || status.is_server_error())
            .unwrap_or(StatusCode::BAD_GATEWAY)
    }

    pub fn to_response_body(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code(),
            message: self.message(),
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_response_body())).into_response()
    }
}

impl ErrorExtensions for ApplicationError {
    fn extend(&self) -> async_graphql::Error {
        let code = i32::from(self.code());
        async_graphql::Error::new(self.message()).extend_with(|_, extensions| {
            extensions.set("code", code);
        })
    }
}
