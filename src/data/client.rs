//! Reqwest-backed implementation of [`ForecastProvider`].
//!
//! Normalization policy (applied here, once, for every consumer):
//! predictions are rounded to the nearest integer; actuals are rounded when
//! present and otherwise kept as `None`; category values are rounded and then
//! dropped unless strictly positive.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::config::API;
use crate::data::{FetchError, ForecastProvider};
use crate::domain::{CategoryShare, ForecastPoint, parse_date_key};
use crate::util::date::request_day_string;

#[derive(Debug, Serialize)]
struct ForecastRequestBody {
    start_date: String,
    months_to_forecast: u32,
}

/// The `{data, success, error}` wrapper every endpoint returns.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default = "Option::default")]
    data: Option<T>,
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawForecastPoint {
    date: String,
    prediction: f64,
    #[serde(default)]
    actual: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawCategoryShare {
    name: String,
    value: f64,
}

pub struct ForecastClient {
    http: Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(API.timeout_secs))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    async fn post_envelope<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        start_day: NaiveDate,
        months: u32,
    ) -> Result<T, FetchError> {
        let body = ForecastRequestBody {
            start_date: request_day_string(start_day),
            months_to_forecast: months,
        };
        let url = format!("{}{}", self.base_url, endpoint);

        log::info!("POST {} start_date={} months={}", url, body.start_date, months);

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport(format!(
                "{endpoint} returned status {status}"
            )));
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        open_envelope(envelope, endpoint)
    }
}

/// Unwrap the envelope into data or a typed failure.
///
/// An empty `data` array is a successful (empty) result; a missing `data`
/// field on a `success: true` envelope is a schema violation.
fn open_envelope<T>(envelope: Envelope<T>, endpoint: &str) -> Result<T, FetchError> {
    if !envelope.success {
        return Err(FetchError::Api(
            envelope
                .error
                .unwrap_or_else(|| format!("{endpoint}: service reported failure")),
        ));
    }
    envelope
        .data
        .ok_or_else(|| FetchError::Decode(format!("{endpoint}: success envelope without data")))
}

fn normalize_points(raw: Vec<RawForecastPoint>) -> Result<Vec<ForecastPoint>, FetchError> {
    raw.into_iter()
        .map(|item| {
            let stamp = parse_date_key(&item.date)
                .ok_or_else(|| FetchError::Decode(format!("unrecognized date key '{}'", item.date)))?;
            Ok(ForecastPoint {
                stamp,
                prediction: item.prediction.round() as i64,
                actual: item.actual.map(|a| a.round() as i64),
            })
        })
        .collect()
}

fn normalize_categories(raw: Vec<RawCategoryShare>) -> Vec<CategoryShare> {
    raw.into_iter()
        .map(|item| CategoryShare {
            name: item.name,
            value: item.value.round() as i64,
        })
        .filter(|share| share.value > 0)
        .collect()
}

#[async_trait]
impl ForecastProvider for ForecastClient {
    async fn fetch_forecast(
        &self,
        start_day: NaiveDate,
        months: u32,
    ) -> Result<Vec<ForecastPoint>, FetchError> {
        let raw = self
            .post_envelope::<Vec<RawForecastPoint>>(API.forecast_endpoint, start_day, months)
            .await?;
        normalize_points(raw)
    }

    async fn fetch_top_countries(
        &self,
        start_day: NaiveDate,
        months: u32,
    ) -> Result<Vec<CategoryShare>, FetchError> {
        let raw = self
            .post_envelope::<Vec<RawCategoryShare>>(
                API.top_countries_endpoint,
                start_day,
                months,
            )
            .await?;
        Ok(normalize_categories(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_point(date: &str, prediction: f64, actual: Option<f64>) -> RawForecastPoint {
        RawForecastPoint {
            date: date.to_string(),
            prediction,
            actual,
        }
    }

    #[test]
    fn predictions_round_to_nearest_integer() {
        let points =
            normalize_points(vec![raw_point("2024-01", 1000.6, None), raw_point("2024-02", 99.4, None)])
                .unwrap();
        assert_eq!(points[0].prediction, 1001);
        assert_eq!(points[1].prediction, 99);
    }

    #[test]
    fn missing_actual_stays_none_in_the_store() {
        let points = normalize_points(vec![
            raw_point("2024-01", 1000.0, Some(900.2)),
            raw_point("2024-02", 1100.0, None),
        ])
        .unwrap();
        assert_eq!(points[0].actual, Some(900));
        assert_eq!(points[1].actual, None);
    }

    #[test]
    fn bad_date_key_is_a_decode_error() {
        let err = normalize_points(vec![raw_point("soon", 1.0, None)]).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn categories_round_then_keep_only_positive() {
        let raw = vec![
            RawCategoryShare { name: "Korea".into(), value: 1161020.18 },
            RawCategoryShare { name: "Rounds away".into(), value: 0.4 },
            RawCategoryShare { name: "Negative".into(), value: -5.0 },
            RawCategoryShare { name: "Rounds up".into(), value: 1.6 },
        ];
        let shares = normalize_categories(raw);
        let names: Vec<_> = shares.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Korea", "Rounds up"]);
        assert_eq!(shares[0].value, 1161020);
        assert_eq!(shares[1].value, 2);
    }

    #[test]
    fn failure_envelope_surfaces_the_service_message() {
        let envelope: Envelope<Vec<RawCategoryShare>> =
            serde_json::from_str(r#"{"data": null, "success": false, "error": "model not initialized"}"#)
                .unwrap();
        let err = open_envelope(envelope, "/forecast").unwrap_err();
        assert_eq!(err, FetchError::Api("model not initialized".into()));
    }

    #[test]
    fn success_envelope_without_data_is_a_decode_error() {
        let envelope: Envelope<Vec<RawForecastPoint>> =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(
            open_envelope(envelope, "/forecast").unwrap_err(),
            FetchError::Decode(_)
        ));
    }

    #[test]
    fn empty_data_is_success_not_error() {
        let envelope: Envelope<Vec<RawForecastPoint>> =
            serde_json::from_str(r#"{"data": [], "success": true}"#).unwrap();
        let raw = open_envelope(envelope, "/forecast").unwrap();
        assert!(normalize_points(raw).unwrap().is_empty());
    }
}
