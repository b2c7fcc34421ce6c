use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use eframe::egui::{Context, DragValue, Ui, Window};
use egui_extras::DatePickerButton;

use crate::config::{CONTROLS, EXPORT};
use crate::domain::ForecastPoint;
use crate::export::{self, ExportFormat, ExportRequest};
use crate::ui::ui_config::{UI_CONFIG, UI_TEXT};
use crate::ui::ui_plot_view::ChartKind;

/// What the controls bar asked the app to do this frame.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ControlsOutput {
    pub forecast_requested: bool,
    pub theme_changed: bool,
    pub reset_view: bool,
    pub open_export: bool,
}

/// Top bar: forecast parameters, chart kind, theme, and the export trigger.
pub fn controls_bar(
    ui: &mut Ui,
    selected_date: &mut NaiveDate,
    forecast_months: &mut u32,
    dark_mode: &mut bool,
    chart_kind: &mut ChartKind,
) -> ControlsOutput {
    let mut output = ControlsOutput::default();

    ui.horizontal_wrapped(|ui| {
        ui.label(UI_TEXT.start_date_label);
        ui.add(DatePickerButton::new(selected_date).id_salt("start_date"));
        *selected_date = CONTROLS.clamp_day(*selected_date);

        ui.add_space(UI_CONFIG.panel_spacing);
        ui.label(UI_TEXT.months_label);
        ui.add(
            DragValue::new(forecast_months)
                .range(CONTROLS.months_min..=CONTROLS.months_max)
                .speed(0.2),
        );
        *forecast_months = CONTROLS.clamp_months(*forecast_months);

        ui.add_space(UI_CONFIG.panel_spacing);
        if ui.button(UI_TEXT.forecast_button).clicked() {
            output.forecast_requested = true;
        }

        ui.separator();
        ui.selectable_value(chart_kind, ChartKind::Line, UI_TEXT.line_chart_button);
        ui.selectable_value(chart_kind, ChartKind::Bar, UI_TEXT.bar_chart_button);
        if ui.button(UI_TEXT.reset_view_button).clicked() {
            output.reset_view = true;
        }

        ui.separator();
        if ui.button(UI_TEXT.export_button).clicked() {
            output.open_export = true;
        }
        if ui.checkbox(dark_mode, UI_TEXT.theme_toggle).changed() {
            output.theme_changed = true;
        }
    });

    output
}

/// Modal export dialog. Holds its own draft range and format between frames
/// and remembers the outcome of the last save.
pub struct ExportPanel {
    pub open: bool,
    format: ExportFormat,
    range_start: NaiveDate,
    range_end: NaiveDate,
    last_saved: Option<PathBuf>,
    last_error: Option<String>,
}

impl Default for ExportPanel {
    fn default() -> Self {
        Self {
            open: false,
            format: ExportFormat::Pdf,
            range_start: CONTROLS.earliest_date(),
            range_end: CONTROLS.latest_date(),
            last_saved: None,
            last_error: None,
        }
    }
}

impl ExportPanel {
    /// Seed the draft range from the dataset's own extent.
    pub fn open_for(&mut self, data: &[ForecastPoint]) {
        if let (Some(first), Some(last)) = (data.first(), data.last()) {
            self.range_start = first.day();
            self.range_end = last.day();
        }
        self.last_saved = None;
        self.last_error = None;
        self.open = true;
    }

    pub fn show(&mut self, ctx: &Context, data: &[ForecastPoint]) {
        if !self.open {
            return;
        }

        let mut open = self.open;
        Window::new(UI_TEXT.export_heading)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(UI_TEXT.export_format_label);
                    ui.selectable_value(&mut self.format, ExportFormat::Pdf, "PDF");
                    ui.selectable_value(&mut self.format, ExportFormat::Csv, "CSV");
                });

                ui.horizontal(|ui| {
                    ui.label(UI_TEXT.export_start_label);
                    ui.add(DatePickerButton::new(&mut self.range_start).id_salt("export_start"));
                    ui.label(UI_TEXT.export_end_label);
                    ui.add(DatePickerButton::new(&mut self.range_end).id_salt("export_end"));
                });
                if self.range_end < self.range_start {
                    self.range_end = self.range_start;
                }

                if ui.button(UI_TEXT.export_save_button).clicked() {
                    self.save(data);
                }

                if let Some(path) = &self.last_saved {
                    ui.label(format!("Saved to {}", path.display()));
                }
                if let Some(error) = &self.last_error {
                    ui.colored_label(ui.visuals().error_fg_color, error);
                }
            });
        self.open = open;
    }

    fn save(&mut self, data: &[ForecastPoint]) {
        let request = ExportRequest {
            format: self.format,
            range_start: self.range_start,
            range_end: self.range_end,
        };
        match export::run(request, data, Path::new(EXPORT.directory)) {
            Ok(path) => {
                self.last_saved = Some(path);
                self.last_error = None;
            }
            Err(error) => {
                log::error!("export failed: {error:#}");
                self.last_error = Some(format!("{error:#}"));
                self.last_saved = None;
            }
        }
    }
}
