// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod export;
pub mod store;
pub mod ui;
pub mod util;
pub mod viewport;

pub use app::App;
pub use data::{ForecastClient, ForecastProvider};
pub use domain::{CategoryShare, ForecastPoint};

// CLI argument parsing
use clap::Parser;

use crate::config::API;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the forecast API server
    #[arg(long, default_value_t = API.base_url.to_string())]
    pub api_url: String,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
