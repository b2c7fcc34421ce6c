use chrono::{DateTime, NaiveDateTime};
use eframe::egui::{Stroke, Ui, Vec2b};
use egui_plot::{
    Axis, AxisHints, Bar, BarChart, Legend, Line, Plot, PlotPoints, Polygon, VPlacement,
};
use serde::{Deserialize, Serialize};

use crate::config::PLOT_CONFIG;
use crate::domain::ForecastPoint;
use crate::ui::UI_TEXT;
use crate::util::date::month_label;
use crate::viewport::{ViewportSelector, ZoomDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
}

/// The forecast chart: renders the viewport's visible window and feeds
/// pointer/wheel/pinch input back into the selector.
#[derive(Default)]
pub struct ForecastPlotView {
    pub kind: ChartKind,
}

fn stamp_to_x(stamp: NaiveDateTime) -> f64 {
    stamp.and_utc().timestamp() as f64
}

fn x_to_stamp(x: f64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(x as i64, 0).map(|dt| dt.naive_utc())
}

/// Snap a plot x-coordinate to the nearest data point's stamp, the way a
/// categorical chart reports the label under the cursor.
fn nearest_stamp(x: f64, points: &[ForecastPoint]) -> Option<NaiveDateTime> {
    points
        .iter()
        .min_by(|a, b| {
            let da = (stamp_to_x(a.stamp) - x).abs();
            let db = (stamp_to_x(b.stamp) - x).abs();
            da.total_cmp(&db)
        })
        .map(|p| p.stamp)
}

/// `1234567.0` renders as `1.2M` on the y-axis.
pub(crate) fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

impl ForecastPlotView {
    pub fn show(&mut self, ui: &mut Ui, full: &[ForecastPoint], selector: &mut ViewportSelector) {
        let visible = selector.visible(full).to_vec();
        let has_actuals = visible.iter().any(|p| matches!(p.actual, Some(a) if a != 0));

        let time_axis = AxisHints::new(Axis::X)
            .label("Date")
            .formatter(|mark, _range| {
                x_to_stamp(mark.value).map(month_label).unwrap_or_default()
            })
            .placement(VPlacement::Bottom);

        let kind = self.kind;
        let pending = selector.pending_selection();

        let plot_response = Plot::new("forecast_plot")
            .height(PLOT_CONFIG.chart_height)
            .legend(Legend::default())
            .custom_x_axes(vec![time_axis])
            .y_axis_formatter(|mark, _range| format_compact(mark.value))
            .label_formatter(|name, value| {
                let date = x_to_stamp(value.x).map(month_label).unwrap_or_default();
                if name.is_empty() {
                    format!("Date: {date}")
                } else {
                    format!("{name}: {:.0} tourists\nDate: {date}", value.y)
                }
            })
            .allow_drag(Vec2b::FALSE)
            .allow_zoom(Vec2b::FALSE)
            .allow_scroll(Vec2b::FALSE)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                match kind {
                    ChartKind::Line => {
                        let forecast: Vec<[f64; 2]> = visible
                            .iter()
                            .map(|p| [stamp_to_x(p.stamp), p.prediction as f64])
                            .collect();
                        plot_ui.line(
                            Line::new(UI_TEXT.series_forecast, PlotPoints::new(forecast))
                                .color(PLOT_CONFIG.color_forecast)
                                .width(PLOT_CONFIG.line_width),
                        );

                        if has_actuals {
                            let actual: Vec<[f64; 2]> = visible
                                .iter()
                                .filter_map(|p| {
                                    p.actual.map(|a| [stamp_to_x(p.stamp), a as f64])
                                })
                                .collect();
                            plot_ui.line(
                                Line::new(UI_TEXT.series_actual, PlotPoints::new(actual))
                                    .color(PLOT_CONFIG.color_actual)
                                    .width(PLOT_CONFIG.line_width),
                            );
                        }
                    }
                    ChartKind::Bar => {
                        let width = bar_width(&visible);
                        let forecast_bars: Vec<Bar> = visible
                            .iter()
                            .map(|p| Bar::new(stamp_to_x(p.stamp), p.prediction as f64).width(width))
                            .collect();
                        plot_ui.bar_chart(
                            BarChart::new(UI_TEXT.series_forecast, forecast_bars)
                                .color(PLOT_CONFIG.color_forecast),
                        );

                        if has_actuals {
                            let actual_bars: Vec<Bar> = visible
                                .iter()
                                .filter_map(|p| {
                                    p.actual.map(|a| {
                                        Bar::new(stamp_to_x(p.stamp), a as f64).width(width * 0.5)
                                    })
                                })
                                .collect();
                            plot_ui.bar_chart(
                                BarChart::new(UI_TEXT.series_actual, actual_bars)
                                    .color(PLOT_CONFIG.color_actual),
                            );
                        }
                    }
                }

                // Live overlay for the in-progress drag selection.
                if let Some((left, right)) = pending {
                    let bounds = plot_ui.plot_bounds();
                    let (y0, y1) = (bounds.min()[1], bounds.max()[1]);
                    let (x0, x1) = (stamp_to_x(left), stamp_to_x(right));
                    plot_ui.polygon(
                        Polygon::new(
                            "",
                            PlotPoints::new(vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1]]),
                        )
                        .fill_color(PLOT_CONFIG.color_selection)
                        .stroke(Stroke::NONE),
                    );
                }

                plot_ui.pointer_coordinate()
            });

        let pointer_x = plot_response.inner.map(|p| p.x);
        let response = plot_response.response;

        if response.drag_started() {
            if let Some(at) = pointer_x.and_then(|x| nearest_stamp(x, &visible)) {
                selector.pointer_down(at);
            }
        } else if response.dragged() {
            if let Some(at) = pointer_x.and_then(|x| nearest_stamp(x, &visible)) {
                selector.pointer_move(at);
            }
        } else if selector.is_selecting() {
            // Covers both releasing the button and dragging off the chart.
            selector.pointer_up();
        }

        if response.hovered() {
            let (scroll_y, pinch, hover_pos) = ui.input(|i| {
                (i.raw_scroll_delta.y, i.zoom_delta(), i.pointer.hover_pos())
            });
            let direction = if scroll_y > 0.0 || pinch > 1.0 {
                Some(ZoomDirection::In)
            } else if scroll_y < 0.0 || pinch < 1.0 {
                Some(ZoomDirection::Out)
            } else {
                None
            };
            if let Some(direction) = direction {
                let rect = response.rect;
                let focal = hover_pos
                    .map(|pos| ((pos.x - rect.left()) / rect.width()) as f64)
                    .unwrap_or(0.5);
                selector.zoom(direction, focal, full);
            }
        }
    }
}

/// Bar width in plot units: a fraction of the tightest point spacing so
/// adjacent months never overlap.
fn bar_width(points: &[ForecastPoint]) -> f64 {
    points
        .windows(2)
        .map(|w| stamp_to_x(w[1].stamp) - stamp_to_x(w[0].stamp))
        .fold(f64::INFINITY, f64::min)
        .clamp(3600.0, 86_400.0 * 31.0)
        * 0.7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_axis_labels() {
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(1_500.0), "1.5K");
        assert_eq!(format_compact(2_300_000.0), "2.3M");
        assert_eq!(format_compact(1_200_000_000.0), "1.2B");
    }

    #[test]
    fn nearest_stamp_snaps_to_the_closest_point() {
        let points: Vec<ForecastPoint> = [1_000_i64, 2_000, 10_000]
            .into_iter()
            .map(|secs| ForecastPoint {
                stamp: DateTime::from_timestamp(secs, 0).unwrap().naive_utc(),
                prediction: 1,
                actual: None,
            })
            .collect();
        assert_eq!(nearest_stamp(1_400.0, &points), Some(points[0].stamp));
        assert_eq!(nearest_stamp(9_000.0, &points), Some(points[2].stamp));
        assert_eq!(nearest_stamp(0.0, &[]), None);
    }
}
