use std::net::SocketAddr;
use std::time::Duration;

use chrono_tz::Tz;
use thiserror::Error;

use crate::modules::timesheets::use_cases::record_punch::policy::ClockOutPolicy;
use crate::shared::infrastructure::spreadsheet_client::google_sheets::DEFAULT_BASE_URL;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub sheets_base_url: String,
    pub timezone: Tz,
    pub clock_out_policy: ClockOutPolicy,
    pub http_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = parse(&lookup, "TIMESHEETS_BIND_ADDR", DEFAULT_BIND_ADDR, |v| {
            v.parse::<SocketAddr>().map_err(|e| e.to_string())
        })?;
        let sheets_base_url = lookup("TIMESHEETS_SHEETS_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timezone = parse(&lookup, "TIMESHEETS_TIMEZONE", "UTC", |v| {
            v.parse::<Tz>().map_err(|e| e.to_string())
        })?;
        let clock_out_policy = parse(&lookup, "TIMESHEETS_CLOCK_OUT_POLICY", "lenient", |v| {
            v.parse::<ClockOutPolicy>()
        })?;
        let http_timeout = parse(
            &lookup,
            "TIMESHEETS_HTTP_TIMEOUT_SECS",
            &DEFAULT_HTTP_TIMEOUT_SECS.to_string(),
            |v| match v.parse::<u64>() {
                Ok(0) => Err("must be greater than zero".to_string()),
                Ok(secs) => Ok(Duration::from_secs(secs)),
                Err(e) => Err(e.to_string()),
            },
        )?;

        Ok(Self {
            bind_addr,
            sheets_base_url,
            timezone,
            clock_out_policy,
            http_timeout,
        })
    }
}

fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
    convert: impl Fn(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    let value = lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string());
    convert(&value).map_err(|reason| ConfigError::Invalid {
        key,
        value,
        reason,
    })
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn it_should_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.sheets_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timezone, Tz::UTC);
        assert_eq!(config.clock_out_policy, ClockOutPolicy::Lenient);
        assert_eq!(config.http_timeout, Duration::from_secs(30));
    }

    #[test]
    fn it_should_read_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TIMESHEETS_BIND_ADDR", "127.0.0.1:8080"),
            ("TIMESHEETS_SHEETS_BASE_URL", "http://localhost:9999"),
            ("TIMESHEETS_TIMEZONE", "Europe/Amsterdam"),
            ("TIMESHEETS_CLOCK_OUT_POLICY", "strict"),
            ("TIMESHEETS_HTTP_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.sheets_base_url, "http://localhost:9999");
        assert_eq!(config.timezone, chrono_tz::Europe::Amsterdam);
        assert_eq!(config.clock_out_policy, ClockOutPolicy::Strict);
        assert_eq!(config.http_timeout, Duration::from_secs(5));
    }

    #[rstest]
    #[case("TIMESHEETS_BIND_ADDR", "not-an-address")]
    #[case("TIMESHEETS_TIMEZONE", "Mars/Olympus_Mons")]
    #[case("TIMESHEETS_CLOCK_OUT_POLICY", "whenever")]
    #[case("TIMESHEETS_HTTP_TIMEOUT_SECS", "0")]
    #[case("TIMESHEETS_HTTP_TIMEOUT_SECS", "soon")]
    fn it_should_reject_invalid_values(#[case] key: &'static str, #[case] value: &str) {
        let error = AppConfig::from_lookup(lookup(&[(key, value)])).unwrap_err();

        assert!(matches!(
            error,
            ConfigError::Invalid { key: k, value: ref v, .. } if k == key && v == value
        ));
    }
}
