use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("timestamp is empty")]
    Empty,

    #[error("timestamp {0} is out of range")]
    OutOfRange(i64),

    #[error("timestamp '{0}' is neither epoch milliseconds nor an ISO-8601 date")]
    Unparsable(String),
}

/// Timestamp as callers send it: epoch milliseconds as a JSON number or a
/// numeric string, or an ISO-8601 string. Fractional milliseconds are
/// truncated toward zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Millis(i64),
    FractionalMillis(f64),
    Text(String),
}

impl From<i64> for RawTimestamp {
    fn from(millis: i64) -> Self {
        RawTimestamp::Millis(millis)
    }
}

impl From<&str> for RawTimestamp {
    fn from(text: &str) -> Self {
        RawTimestamp::Text(text.to_string())
    }
}

impl RawTimestamp {
    pub fn parse(&self) -> Result<DateTime<Utc>, TimestampError> {
        match self {
            RawTimestamp::Millis(millis) => from_millis(*millis),
            RawTimestamp::FractionalMillis(millis) => from_fractional_millis(*millis)
                .unwrap_or_else(|| Err(TimestampError::Unparsable(millis.to_string()))),
            RawTimestamp::Text(text) => parse_text(text),
        }
    }
}

fn from_millis(millis: i64) -> Result<DateTime<Utc>, TimestampError> {
    DateTime::from_timestamp_millis(millis).ok_or(TimestampError::OutOfRange(millis))
}

/// `None` for NaN and infinities; `as` saturates everything else.
fn from_fractional_millis(millis: f64) -> Option<Result<DateTime<Utc>, TimestampError>> {
    millis
        .is_finite()
        .then(|| from_millis(millis.trunc() as i64))
}

fn parse_text(text: &str) -> Result<DateTime<Utc>, TimestampError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TimestampError::Empty);
    }
    if let Ok(millis) = text.parse::<i64>() {
        return from_millis(millis);
    }
    if let Some(parsed) = text.parse::<f64>().ok().and_then(from_fractional_millis) {
        return parsed;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.with_timezone(&Utc));
    }
    // Offset-less ISO form is read as UTC.
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| TimestampError::Unparsable(text.to_string()))
}
