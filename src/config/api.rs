//! Remote forecast service configuration.

pub struct ApiConfig {
    /// Default service base; overridable with `--api-url`.
    pub base_url: &'static str,
    pub forecast_endpoint: &'static str,
    pub top_countries_endpoint: &'static str,
    /// Transport-level timeout. Timeouts are the transport's job, not the stores'.
    pub timeout_secs: u64,
}

pub const API: ApiConfig = ApiConfig {
    base_url: "http://localhost:5000",
    forecast_endpoint: "/forecast",
    top_countries_endpoint: "/forecast-top-countries",
    timeout_secs: 30,
};
