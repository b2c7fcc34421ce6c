use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Timelike};

/// Format used for `start_date` in request bodies.
pub const REQUEST_DAY_FORMAT: &str = "%Y-%m-%d";

/// Format used for dates embedded in report filenames and captions.
pub const REPORT_DAY_FORMAT: &str = "%m-%d-%Y";

/// The calendar day the user means on their own clock.
///
/// The remote service keys everything off a plain `YYYY-MM-DD` day, so the
/// offset of wherever this process runs must not leak into the request.
pub fn wall_clock_day(instant: DateTime<Local>) -> NaiveDate {
    instant.naive_local().date()
}

pub fn request_day_string(day: NaiveDate) -> String {
    day.format(REQUEST_DAY_FORMAT).to_string()
}

pub fn report_day_string(day: NaiveDate) -> String {
    day.format(REPORT_DAY_FORMAT).to_string()
}

/// 12-hour display time: `13:05` becomes `1:05 pm`, midnight `12:00 am`.
pub fn format_12_hour(stamp: NaiveDateTime) -> String {
    let hour = stamp.hour();
    let period = if hour >= 12 { "pm" } else { "am" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, stamp.minute(), period)
}

/// Axis/tooltip label for a monthly point, e.g. `Jan 2024`.
pub fn month_label(stamp: NaiveDateTime) -> String {
    stamp.format("%b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stamp(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn twelve_hour_midnight_and_noon() {
        assert_eq!(format_12_hour(stamp(0, 0)), "12:00 am");
        assert_eq!(format_12_hour(stamp(12, 0)), "12:00 pm");
    }

    #[test]
    fn twelve_hour_pads_minutes() {
        assert_eq!(format_12_hour(stamp(13, 5)), "1:05 pm");
        assert_eq!(format_12_hour(stamp(9, 30)), "9:30 am");
    }

    #[test]
    fn report_day_uses_us_ordering() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(report_day_string(day), "01-31-2024");
        assert_eq!(request_day_string(day), "2024-01-31");
    }

    #[test]
    fn month_label_is_short_month_and_year() {
        assert_eq!(month_label(stamp(0, 0)), "May 2024");
    }
}
