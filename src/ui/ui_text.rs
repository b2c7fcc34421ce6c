//! Every user-facing string in one place.

pub struct UiText {
    pub app_title: &'static str,
    pub months_label: &'static str,
    pub start_date_label: &'static str,
    pub forecast_button: &'static str,
    pub export_button: &'static str,
    pub reset_view_button: &'static str,
    pub line_chart_button: &'static str,
    pub bar_chart_button: &'static str,
    pub theme_toggle: &'static str,
    pub pie_heading: &'static str,
    pub chart_error_title: &'static str,
    pub pie_error_title: &'static str,
    pub loading: &'static str,
    pub no_data: &'static str,
    pub series_forecast: &'static str,
    pub series_actual: &'static str,
    pub export_heading: &'static str,
    pub export_format_label: &'static str,
    pub export_start_label: &'static str,
    pub export_end_label: &'static str,
    pub export_save_button: &'static str,
    pub footnote: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Tourcast - Tourist Arrivals Forecast",
    months_label: "Months to forecast:",
    start_date_label: "Starting date:",
    forecast_button: "Forecast",
    export_button: "Export",
    reset_view_button: "Reset view",
    line_chart_button: "Line",
    bar_chart_button: "Bar",
    theme_toggle: "Dark mode",
    pie_heading: "Top 10 Countries by Arrivals",
    chart_error_title: "Couldn't load the chart graph",
    pie_error_title: "Couldn't load the pie graph",
    loading: "Loading...",
    no_data: "No data available",
    series_forecast: "Forecasted",
    series_actual: "Actual",
    export_heading: "Export Data",
    export_format_label: "Export as:",
    export_start_label: "Start",
    export_end_label: "End",
    export_save_button: "Save report",
    footnote: "Forecasts are generated by the remote seasonal model; actual arrivals come from the Department of Tourism dataset.",
};
