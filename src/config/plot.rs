//! Chart colors and sizing.

use eframe::egui::Color32;

pub struct PlotConfig {
    pub color_forecast: Color32,
    pub color_actual: Color32,
    /// Selection overlay while drag-selecting a range.
    pub color_selection: Color32,
    /// Gradient stops sampled once per fetch for the pie slices.
    pub pie_gradient_colors: &'static [&'static str],
    pub pie_inner_radius_frac: f32,
    pub chart_height: f32,
    pub line_width: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    color_forecast: Color32::from_rgb(0xff, 0x55, 0x00),
    color_actual: Color32::from_rgb(0xb8, 0x89, 0x09),
    color_selection: Color32::from_rgba_premultiplied(120, 120, 160, 60),
    pie_gradient_colors: &["#2d0b59", "#781c6d", "#bc3754", "#ed6925", "#fbb41a", "#fcffa4"],
    pie_inner_radius_frac: 0.5,
    chart_height: 420.0,
    line_width: 2.0,
};
