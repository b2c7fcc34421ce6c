use async_trait::async_trait;
use chrono::NaiveDate;

use crate::data::FetchError;
use crate::domain::{CategoryShare, ForecastPoint};

/// Abstract interface to the remote forecast service.
///
/// The stores only ever see this trait, so tests can swap in canned providers
/// without touching the network.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Point forecast series for `months` starting at `start_day`.
    async fn fetch_forecast(
        &self,
        start_day: NaiveDate,
        months: u32,
    ) -> Result<Vec<ForecastPoint>, FetchError>;

    /// Top contributing countries over the same horizon.
    async fn fetch_top_countries(
        &self,
        start_day: NaiveDate,
        months: u32,
    ) -> Result<Vec<CategoryShare>, FetchError>;
}
