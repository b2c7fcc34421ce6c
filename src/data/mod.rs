mod client;
mod error;
mod provider;

pub use {client::ForecastClient, error::FetchError, provider::ForecastProvider};
