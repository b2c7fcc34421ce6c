//! Configuration module for the dashboard.

mod api;
mod controls;
mod export;

// Can't be private because the UI reaches into it directly
pub mod plot;

// Re-export commonly used items
pub use api::{API, ApiConfig};
pub use controls::{CONTROLS, ControlLimits};
pub use export::{EXPORT, ExportConfig};
pub use plot::PLOT_CONFIG;
