#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window

use clap::Parser;
use eframe::NativeOptions;

use tourcast::{Cli, run_app, ui::UI_TEXT};

fn main() -> eframe::Result {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, global_level)
        .filter(Some("tourcast"), my_code_level)
        .init();

    let args = Cli::parse();
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title(UI_TEXT.app_title),
        ..Default::default()
    };

    eframe::run_native(
        "Tourcast",
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)))),
    )
}
