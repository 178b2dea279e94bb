// Canonical cell rendering for dates and times: `M/D/YYYY` and
// `h:MM:SS AM`, both in the timesheet's time zone. The spreadsheet parses
// these under USER_ENTERED, so the duration formula can subtract them.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

const DATE_FORMAT: &str = "%-m/%-d/%Y";
const TIME_FORMAT: &str = "%-I:%M:%S %p";

pub fn render_date(instant: DateTime<Utc>, timezone: Tz) -> String {
    instant.with_timezone(&timezone).format(DATE_FORMAT).to_string()
}

pub fn render_time(instant: DateTime<Utc>, timezone: Tz) -> String {
    instant.with_timezone(&timezone).format(TIME_FORMAT).to_string()
}

pub fn render_calendar_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod render_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case(Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap(), "10/17/2026", "9:00:00 AM")]
    #[case(Utc.with_ymd_and_hms(2026, 1, 5, 17, 4, 9).unwrap(), "1/5/2026", "5:04:09 PM")]
    #[case(Utc.with_ymd_and_hms(2026, 3, 1, 0, 30, 0).unwrap(), "3/1/2026", "12:30:00 AM")]
    #[case(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(), "3/1/2026", "12:00:00 PM")]
    fn it_should_render_in_utc(
        #[case] instant: DateTime<Utc>,
        #[case] date: &str,
        #[case] time: &str,
    ) {
        assert_eq!(render_date(instant, Tz::UTC), date);
        assert_eq!(render_time(instant, Tz::UTC), time);
    }

    #[rstest]
    fn it_should_render_in_the_configured_zone() {
        let late_evening_utc = Utc.with_ymd_and_hms(2026, 10, 17, 23, 15, 0).unwrap();
        let zone = chrono_tz::Europe::Amsterdam;
        assert_eq!(render_date(late_evening_utc, zone), "10/18/2026");
        assert_eq!(render_time(late_evening_utc, zone), "1:15:00 AM");
    }

    #[rstest]
    fn it_should_render_calendar_dates_like_instants() {
        let date = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
        assert_eq!(render_calendar_date(date), "7/4/2026");
    }
}
