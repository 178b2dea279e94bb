use chrono::{DateTime, TimeZone, Utc};

pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, hour, minute, 0).unwrap()
}

pub fn nine_am() -> DateTime<Utc> {
    at(9, 0)
}

pub fn five_pm() -> DateTime<Utc> {
    at(17, 0)
}
