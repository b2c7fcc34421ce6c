mod styles;
mod ui_config;
mod ui_panels;
mod ui_pie_view;
mod ui_plot_view;
mod ui_text;

pub use styles::{apply_theme, derive_pie_colors, error_box, loading_box};
pub use ui_config::{UI_CONFIG, UiConfig};
pub use ui_panels::{ControlsOutput, ExportPanel, controls_bar};
pub use ui_pie_view::PieView;
pub use ui_plot_view::{ChartKind, ForecastPlotView};
pub use ui_text::UI_TEXT;
