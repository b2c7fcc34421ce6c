use eframe::egui::{Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub panel_spacing: f32,
    pub pie_legend_swatch: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    panel_spacing: 10.0,
    pie_legend_swatch: 12.0,
};

impl UiConfig {
    /// Frame for the top controls bar (standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }
}
