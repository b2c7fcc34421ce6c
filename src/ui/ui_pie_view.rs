use std::f32::consts::TAU;

use eframe::egui::{Color32, Pos2, Sense, Shape, Stroke, Ui, Vec2, pos2};

use crate::config::PLOT_CONFIG;
use crate::domain::CategoryShare;
use crate::ui::ui_config::UI_CONFIG;

/// Angular resolution of each sector's fan. Small enough that arcs read as
/// smooth at legend-panel sizes.
const STEP_RADIANS: f32 = 0.05;

/// Donut chart of category shares with a swatch legend beside it.
///
/// egui has no built-in pie, so each sector is tessellated into a fan of
/// convex quads between the inner and outer radius.
pub struct PieView;

impl PieView {
    pub fn show(ui: &mut Ui, shares: &[CategoryShare], colors: &[Color32]) {
        let total: i64 = shares.iter().map(|s| s.value).sum();
        if total <= 0 {
            return;
        }

        ui.horizontal(|ui| {
            let side = ui.available_height().min(260.0).max(160.0);
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());
            let center = rect.center();
            let outer = side * 0.5 - 4.0;
            let inner = outer * PLOT_CONFIG.pie_inner_radius_frac;

            let painter = ui.painter_at(rect);
            let mut angle = -TAU / 4.0; // twelve o'clock
            for (i, share) in shares.iter().enumerate() {
                let sweep = share.value as f32 / total as f32 * TAU;
                let color = colors.get(i).copied().unwrap_or(Color32::GRAY);
                paint_sector(&painter, center, inner, outer, angle, angle + sweep, color);
                angle += sweep;
            }

            ui.add_space(UI_CONFIG.panel_spacing);
            ui.vertical(|ui| {
                for (i, share) in shares.iter().enumerate() {
                    let color = colors.get(i).copied().unwrap_or(Color32::GRAY);
                    legend_entry(ui, color, share, total);
                }
            });
        });
    }
}

fn paint_sector(
    painter: &eframe::egui::Painter,
    center: Pos2,
    inner: f32,
    outer: f32,
    from: f32,
    to: f32,
    color: Color32,
) {
    let mut a = from;
    while a < to {
        let b = (a + STEP_RADIANS).min(to);
        painter.add(Shape::convex_polygon(
            vec![
                ring_point(center, inner, a),
                ring_point(center, outer, a),
                ring_point(center, outer, b),
                ring_point(center, inner, b),
            ],
            color,
            Stroke::NONE,
        ));
        a = b;
    }
}

fn ring_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    pos2(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

fn legend_entry(ui: &mut Ui, color: Color32, share: &CategoryShare, total: i64) {
    ui.horizontal(|ui| {
        let size = UI_CONFIG.pie_legend_swatch;
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
        ui.painter_at(rect).rect_filled(rect, 2.0, color);
        let percent = share.value as f64 / total as f64 * 100.0;
        ui.label(format!("{} ({:.1}%)", share.name, percent));
    });
}
