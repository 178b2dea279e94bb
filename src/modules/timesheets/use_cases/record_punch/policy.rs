use std::fmt;
use std::str::FromStr;

/// What a clock-out does when the row it targets has no clock-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClockOutPolicy {
    /// Write the clock-out anyway; the row formula then shows "MISSING IN".
    #[default]
    Lenient,
    /// Refuse the clock-out with a validation error.
    Strict,
}

impl FromStr for ClockOutPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(ClockOutPolicy::Lenient),
            "strict" => Ok(ClockOutPolicy::Strict),
            other => Err(format!("unknown clock-out policy '{other}', expected lenient or strict")),
        }
    }
}

impl fmt::Display for ClockOutPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockOutPolicy::Lenient => f.write_str("lenient"),
            ClockOutPolicy::Strict => f.write_str("strict"),
        }
    }
}
