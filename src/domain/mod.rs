// Domain types and value objects
mod forecast;

// Re-export commonly used types
pub use forecast::{CategoryShare, ForecastPoint, parse_date_key};
