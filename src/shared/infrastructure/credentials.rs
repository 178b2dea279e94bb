// Caller-supplied OAuth2 tokens.
//
// Token exchange and refresh happen outside this service; a request carries
// a token set and we only check that it can authorize a Sheets call.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("access token is missing")]
    MissingAccessToken,

    #[error("unsupported token type: {0}")]
    UnsupportedTokenType(String),

    #[error("access token expired at {0}")]
    Expired(DateTime<Utc>),
}

/// Token set as issued by the OAuth2 provider. `expiry_date` is epoch
/// milliseconds.
#[derive(Clone, Default, Deserialize)]
pub struct OAuthToken {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<i64>,
}

impl fmt::Debug for OAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthToken")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .field("token_type", &self.token_type)
            .field("expiry_date", &self.expiry_date)
            .finish()
    }
}

/// Bearer credentials that passed validation.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_token: String,
}

impl Credentials {
    pub fn bearer_token(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credentials(<redacted>)")
    }
}

pub fn authorize(token: &OAuthToken, now: DateTime<Utc>) -> Result<Credentials, CredentialError> {
    let access_token = token.access_token.trim();
    if access_token.is_empty() {
        return Err(CredentialError::MissingAccessToken);
    }
    if let Some(token_type) = &token.token_type {
        if !token_type.eq_ignore_ascii_case("bearer") {
            return Err(CredentialError::UnsupportedTokenType(token_type.clone()));
        }
    }
    if let Some(expired_at) = token
        .expiry_date
        .and_then(DateTime::from_timestamp_millis)
        .filter(|expiry| *expiry <= now)
    {
        return Err(CredentialError::Expired(expired_at));
    }
    Ok(Credentials {
        access_token: access_token.to_string(),
    })
}
