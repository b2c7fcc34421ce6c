//! Export transformers: two independent projections of a date-range-filtered
//! subset of the forecast dataset.
//!
//! Both transformers read the raw dataset, never the chart's currently-zoomed
//! view, and neither mutates its input.

mod csv;
mod pdf;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

pub use csv::{CSV_HEADER, csv_filename, render_csv, write_csv};
pub use pdf::{DayGroup, ReportRow, group_by_day, pdf_filename, write_pdf};

use crate::domain::ForecastPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

#[derive(Debug, Clone, Copy)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
}

/// Run one export against the raw dataset; returns the written path.
pub fn run(
    request: ExportRequest,
    data: &[ForecastPoint],
    directory: &Path,
) -> anyhow::Result<PathBuf> {
    match request.format {
        ExportFormat::Csv => write_csv(directory, data, request.range_start, request.range_end),
        ExportFormat::Pdf => write_pdf(directory, data, request.range_start, request.range_end),
    }
}

/// Points whose calendar day falls inside the inclusive range, in dataset order.
pub(crate) fn points_in_range<'a>(
    data: &'a [ForecastPoint],
    start: NaiveDate,
    end: NaiveDate,
) -> impl Iterator<Item = &'a ForecastPoint> {
    data.iter().filter(move |point| {
        let day = point.day();
        day >= start && day <= end
    })
}
