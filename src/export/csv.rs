//! Flat CSV projection: one row per point, no grouping.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;

use crate::domain::ForecastPoint;
use crate::export::points_in_range;
use crate::util::date::report_day_string;

pub const CSV_HEADER: &str = "Date,Forecasted Arrivals,Actual Arrivals";

fn date_cell(point: &ForecastPoint) -> String {
    if point.stamp.time() == chrono::NaiveTime::MIN {
        point.stamp.format("%Y-%m-%d").to_string()
    } else {
        point.stamp.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Serialize the inclusive range as CSV text, actuals zero-filled.
pub fn render_csv(data: &[ForecastPoint], start: NaiveDate, end: NaiveDate) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for point in points_in_range(data, start, end) {
        out.push_str(&format!(
            "{},{},{}\n",
            date_cell(point),
            point.prediction,
            point.actual.unwrap_or(0)
        ));
    }
    out
}

pub fn csv_filename(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "Tourist_Arrivals_Report_{}_to_{}.csv",
        report_day_string(start),
        report_day_string(end)
    )
}

pub fn write_csv(
    directory: &Path,
    data: &[ForecastPoint],
    start: NaiveDate,
    end: NaiveDate,
) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(directory)
        .with_context(|| format!("creating export directory '{}'", directory.display()))?;
    let path = directory.join(csv_filename(start, end));
    fs::write(&path, render_csv(data, start, end))
        .with_context(|| format!("writing CSV export '{}'", path.display()))?;
    log::info!("CSV export written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_date_key;

    fn point(key: &str, prediction: i64, actual: Option<i64>) -> ForecastPoint {
        ForecastPoint {
            stamp: parse_date_key(key).unwrap(),
            prediction,
            actual,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monthly_example_zero_fills_missing_actual() {
        let data = vec![
            point("2024-01", 1000, Some(900)),
            point("2024-02", 1100, None),
        ];
        let csv = render_csv(&data, day(2024, 1, 1), day(2024, 12, 31));
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines, vec![
            "Date,Forecasted Arrivals,Actual Arrivals",
            "2024-01-01,1000,900",
            "2024-02-01,1100,0",
        ]);
    }

    #[test]
    fn range_filter_is_inclusive_and_order_preserving() {
        let data = vec![
            point("2024-01-01", 10, None),
            point("2024-01-02", 11, None),
            point("2024-01-03", 12, None),
            point("2024-01-04", 13, None),
        ];
        let csv = render_csv(&data, day(2024, 1, 2), day(2024, 1, 3));

        // Re-parse: exactly the in-range rows, in original order.
        let rows: Vec<Vec<&str>> = csv
            .lines()
            .skip(1)
            .map(|line| line.split(',').collect())
            .collect();
        assert_eq!(rows, vec![
            vec!["2024-01-02", "11", "0"],
            vec!["2024-01-03", "12", "0"],
        ]);
    }

    #[test]
    fn intraday_points_keep_their_time_in_the_date_column() {
        let data = vec![point("2024-01-02 13:30", 42, Some(40))];
        let csv = render_csv(&data, day(2024, 1, 2), day(2024, 1, 2));
        assert!(csv.contains("2024-01-02 13:30,42,40"));
    }

    #[test]
    fn empty_range_yields_header_only() {
        let data = vec![point("2024-01-01", 10, None)];
        let csv = render_csv(&data, day(2025, 1, 1), day(2025, 1, 2));
        assert_eq!(csv, format!("{CSV_HEADER}\n"));
    }

    #[test]
    fn filename_embeds_both_report_dates() {
        assert_eq!(
            csv_filename(day(2024, 1, 5), day(2024, 2, 10)),
            "Tourist_Arrivals_Report_01-05-2024_to_02-10-2024.csv"
        );
    }
}
