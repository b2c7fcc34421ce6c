use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One normalized forecast record: a date key, the predicted arrival count
/// and the observed count where ground truth exists.
///
/// `actual` stays `None` for dates with no ground truth (typically future
/// dates); zero-filling happens only at the export/display boundary.
/// Datasets are replaced wholesale on each fetch, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub stamp: NaiveDateTime,
    pub prediction: i64,
    pub actual: Option<i64>,
}

impl ForecastPoint {
    pub fn day(&self) -> NaiveDate {
        self.stamp.date()
    }
}

/// One ranked contributor (a country) and its arrival share.
///
/// Collection order is the response's insertion order; values are strictly
/// positive after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    pub value: i64,
}

/// Parse the date key shapes the service is known to emit.
///
/// Accepted, most specific first: `2024-01-15 13:00:00`, `2024-01-15T13:00:00`,
/// `2024-01-15 13:00`, `2024-01-15`, `2024-01` (first of month). Chronological
/// order of the parsed stamps matches lexicographic order of the raw keys.
pub fn parse_date_key(raw: &str) -> Option<NaiveDateTime> {
    const STAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

    for format in STAMP_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(stamp);
        }
    }
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0);
    }
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok()?.and_hms_opt(0, 0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_month_keys_to_first_of_month() {
        let stamp = parse_date_key("2024-02").unwrap();
        assert_eq!(stamp.date(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(stamp.time(), chrono::NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn parses_day_and_datetime_keys() {
        assert_eq!(
            parse_date_key("2024-02-03").unwrap().date(),
            NaiveDate::from_ymd_opt(2024, 2, 3).unwrap()
        );
        let with_time = parse_date_key("2024-02-03 13:30").unwrap();
        assert_eq!(with_time.time(), chrono::NaiveTime::from_hms_opt(13, 30, 0).unwrap());
        assert!(parse_date_key("2024-02-03T13:30:15").is_some());
    }

    #[test]
    fn rejects_garbage_keys() {
        assert!(parse_date_key("not-a-date").is_none());
        assert!(parse_date_key("").is_none());
    }

    #[test]
    fn parsed_order_matches_lexicographic_key_order() {
        let keys = ["2023-12", "2024-01-15", "2024-01-15 06:00", "2024-02"];
        let stamps: Vec<_> = keys.iter().map(|k| parse_date_key(k).unwrap()).collect();
        assert!(stamps.windows(2).all(|w| w[0] < w[1]));
    }
}
