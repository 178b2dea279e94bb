use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftKind {
    ClockIn,
    ClockOut,
}

/// A single punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftEvent {
    pub kind: ShiftKind,
    pub timestamp: DateTime<Utc>,
}

impl ShiftEvent {
    pub fn clock_in(timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: ShiftKind::ClockIn,
            timestamp,
        }
    }

    pub fn clock_out(timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: ShiftKind::ClockOut,
            timestamp,
        }
    }
}

/// One clock-in/clock-out pair. `clock_out >= clock_in` is expected but not
/// enforced; the duration formula surfaces violations in the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub clock_in: DateTime<Utc>,
    pub clock_out: Option<DateTime<Utc>>,
}

impl Shift {
    pub fn new(clock_in: DateTime<Utc>, clock_out: Option<DateTime<Utc>>) -> Self {
        Self {
            clock_in,
            clock_out,
        }
    }
}
