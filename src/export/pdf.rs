//! Day-grouped, paginated PDF projection: one A4 page per calendar day.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use chrono::NaiveDate;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect, Rgb,
};

use crate::config::EXPORT;
use crate::domain::ForecastPoint;
use crate::export::points_in_range;
use crate::util::date::{format_12_hour, report_day_string};

// printpdf's Mm wraps an f32, so all layout arithmetic stays f32.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const ROW_HEIGHT_MM: f32 = 8.0;

/// One rendered table row; zero-filling of actuals happens while grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub time: String,
    pub forecast: i64,
    pub actual: i64,
}

/// All rows sharing one calendar day; renders as one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub rows: Vec<ReportRow>,
}

/// Group the inclusive range by calendar day, preserving dataset order.
pub fn group_by_day(data: &[ForecastPoint], start: NaiveDate, end: NaiveDate) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for point in points_in_range(data, start, end) {
        let day = point.day();
        let row = ReportRow {
            time: format_12_hour(point.stamp),
            forecast: point.prediction,
            actual: point.actual.unwrap_or(0),
        };
        match groups.last_mut() {
            Some(group) if group.date == day => group.rows.push(row),
            _ => groups.push(DayGroup { date: day, rows: vec![row] }),
        }
    }
    groups
}

pub fn pdf_filename(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        format!("Energy Load Report ({}).pdf", report_day_string(start))
    } else {
        format!(
            "Energy Load Report ({} to {}).pdf",
            report_day_string(start),
            report_day_string(end)
        )
    }
}

struct PageFonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

pub fn write_pdf(
    directory: &Path,
    data: &[ForecastPoint],
    start: NaiveDate,
    end: NaiveDate,
) -> anyhow::Result<PathBuf> {
    let groups = group_by_day(data, start, end);
    let has_actuals = groups.iter().any(|g| g.rows.iter().any(|r| r.actual != 0));
    let multi_day = start != end;

    let (doc, first_page, first_layer) = PdfDocument::new(
        EXPORT.report_title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "content",
    );
    let fonts = PageFonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| anyhow!("loading builtin font: {e}"))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| anyhow!("loading builtin font: {e}"))?,
    };

    if groups.is_empty() {
        let layer = doc.get_page(first_page).get_layer(first_layer);
        render_empty_page(&layer, &fonts, start, end, multi_day);
    } else {
        for (index, group) in groups.iter().enumerate() {
            let layer = if index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page, layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
                doc.get_page(page).get_layer(layer)
            };
            let range_caption = (index == 0 && groups.len() > 1)
                .then(|| format!("{} to {}", report_day_string(start), report_day_string(end)));
            render_day_page(&layer, &fonts, group, range_caption.as_deref(), has_actuals);
        }
    }

    std::fs::create_dir_all(directory)
        .with_context(|| format!("creating export directory '{}'", directory.display()))?;
    let path = directory.join(pdf_filename(start, end));
    let file = File::create(&path)
        .with_context(|| format!("creating PDF export '{}'", path.display()))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| anyhow!("writing PDF export '{}': {e}", path.display()))?;
    log::info!("PDF export written to {}", path.display());
    Ok(path)
}

fn render_page_header(
    layer: &PdfLayerReference,
    fonts: &PageFonts,
    range_caption: Option<&str>,
    day_caption: &str,
) -> f32 {
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
    layer.use_text(EXPORT.report_title, 18.0, Mm(MARGIN_MM), Mm(y), &fonts.bold);
    y -= 10.0;

    if let Some(caption) = range_caption {
        layer.use_text(caption, 11.0, Mm(MARGIN_MM), Mm(y), &fonts.regular);
        y -= 8.0;
    }

    layer.use_text(day_caption, 12.0, Mm(MARGIN_MM), Mm(y), &fonts.bold);
    y - 12.0
}

fn render_empty_page(
    layer: &PdfLayerReference,
    fonts: &PageFonts,
    start: NaiveDate,
    end: NaiveDate,
    multi_day: bool,
) {
    let caption = if multi_day {
        format!("{} to {}", report_day_string(start), report_day_string(end))
    } else {
        report_day_string(start)
    };
    let y = render_page_header(layer, fonts, None, &caption);
    layer.use_text("No data available", 11.0, Mm(MARGIN_MM), Mm(y), &fonts.regular);
}

fn render_day_page(
    layer: &PdfLayerReference,
    fonts: &PageFonts,
    group: &DayGroup,
    range_caption: Option<&str>,
    has_actuals: bool,
) {
    let mut y = render_page_header(layer, fonts, range_caption, &report_day_string(group.date));

    let table_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    let columns: &[&str] = if has_actuals {
        &["Time", "Forecasted", "Actual"]
    } else {
        &["Time", "Forecasted"]
    };
    let column_width = table_width / columns.len() as f32;

    // Header row with a solid fill.
    fill_row(layer, y, table_width, Rgb::new(0.85, 0.85, 0.88, None));
    for (i, title) in columns.iter().enumerate() {
        layer.use_text(
            *title,
            11.0,
            Mm(MARGIN_MM + 2.0 + column_width * i as f32),
            Mm(y + 2.0),
            &fonts.bold,
        );
    }
    y -= ROW_HEIGHT_MM;

    for (index, row) in group.rows.iter().enumerate() {
        if y < MARGIN_MM {
            // A day's rows beyond one page worth are dropped rather than
            // drawn off the sheet.
            log::warn!("PDF page for {} truncated at {} rows", group.date, index);
            break;
        }
        if index % 2 == 1 {
            fill_row(layer, y, table_width, Rgb::new(0.93, 0.93, 0.95, None));
        }
        let mut cells = vec![row.time.clone(), row.forecast.to_string()];
        if has_actuals {
            cells.push(row.actual.to_string());
        }
        for (i, cell) in cells.iter().enumerate() {
            layer.use_text(
                cell,
                10.0,
                Mm(MARGIN_MM + 2.0 + column_width * i as f32),
                Mm(y + 2.0),
                &fonts.regular,
            );
        }
        y -= ROW_HEIGHT_MM;
    }
}

fn fill_row(layer: &PdfLayerReference, baseline: f32, width: f32, shade: Rgb) {
    layer.set_fill_color(Color::Rgb(shade));
    layer.add_rect(Rect::new(
        Mm(MARGIN_MM),
        Mm(baseline - 1.5),
        Mm(MARGIN_MM + width),
        Mm(baseline + ROW_HEIGHT_MM - 1.5),
    ));
    // Back to black for the text that sits on top.
    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
}
