// Hide the console window on Windows release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! Tally
//!
//! A small desktop utility that counts words, characters, sentences, and
//! paragraphs live while you type. Built on egui/eframe.

mod app;
mod config;
mod editor;
mod error;
mod export;
mod state;
mod stats;
mod string_utils;
mod theme;
mod ui;

use eframe::egui::ViewportBuilder;
use log::info;

use app::TallyApp;
use config::{load_config, Settings, WindowSize};

/// Window title and eframe app id.
const APP_NAME: &str = "Tally - Word Counter";

/// Build the initial viewport from the remembered window geometry.
fn initial_viewport(window: &WindowSize) -> ViewportBuilder {
    let mut viewport = ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size([window.width, window.height])
        .with_min_inner_size([Settings::MIN_WINDOW_WIDTH, Settings::MIN_WINDOW_HEIGHT]);

    if let (Some(x), Some(y)) = (window.x, window.y) {
        viewport = viewport.with_position([x, y]);
    }
    if window.maximized {
        viewport = viewport.with_maximized(true);
    }
    viewport
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = load_config();
    info!(
        "Starting {} at {}x{}",
        APP_NAME, settings.window_size.width, settings.window_size.height
    );

    let native_options = eframe::NativeOptions {
        viewport: initial_viewport(&settings.window_size),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(TallyApp::new(cc)))),
    )
}
