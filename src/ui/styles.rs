use colorgrad::Gradient;
use eframe::egui::{Color32, Context, RichText, Ui, Visuals};

use crate::config::PLOT_CONFIG;
use crate::ui::UI_TEXT;

/// Apply the persisted theme choice.
pub fn apply_theme(ctx: &Context, dark_mode: bool) {
    if dark_mode {
        ctx.set_visuals(Visuals::dark());
    } else {
        ctx.set_visuals(Visuals::light());
    }
}

/// One stable color per category index, derived once per fetched dataset.
///
/// Re-deriving on every render would reshuffle the pie on repaint; callers
/// must hold onto the returned palette for the dataset's lifetime.
pub fn derive_pie_colors(count: usize) -> Vec<Color32> {
    let gradient = colorgrad::GradientBuilder::new()
        .html_colors(PLOT_CONFIG.pie_gradient_colors)
        .build::<colorgrad::LinearGradient>()
        .expect("pie gradient stops are valid html colors");

    (0..count)
        .map(|i| {
            let t = if count <= 1 {
                0.5
            } else {
                i as f32 / (count - 1) as f32
            };
            let rgba = gradient.at(t).to_rgba8();
            Color32::from_rgb(rgba[0], rgba[1], rgba[2])
        })
        .collect()
}

pub fn error_box(ui: &mut Ui, title: &str, message: Option<&str>) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(title).strong().color(ui.visuals().error_fg_color));
        if let Some(message) = message {
            ui.label(message);
        }
    });
}

pub fn loading_box(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.spinner();
        ui.label(UI_TEXT.loading);
    });
}
