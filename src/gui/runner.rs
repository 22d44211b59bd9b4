//! GUI runner - launches the main rostr application window.

use anyhow::Result;
use eframe::egui;
use tracing::warn;

use crate::config::Config;

use super::app::RostrApp;

/// Run the main GUI application
pub fn run_gui() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config: {e}. Falling back to defaults.");
            Config::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("rostr"),
        ..Default::default()
    };

    eframe::run_native(
        "rostr",
        options,
        Box::new(move |_cc| Ok(Box::new(RostrApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {e}"))
}
