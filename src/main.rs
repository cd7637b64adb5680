// Delivery Date Picker
// Demo host: loads settings and a shipping option feed, then shows the picker

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use delivery_date_picker::services::feed::load_shipping_options;
use delivery_date_picker::services::settings::SettingsService;
use delivery_date_picker::ui_egui::PickerApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Delivery Date Picker");

    let settings_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(SettingsService::default_path);
    let settings_service = SettingsService::new(settings_path);
    let settings = settings_service.get()?;

    let options = match settings_service.resolve_options_path(&settings) {
        Some(path) => load_shipping_options(&path)?,
        None => {
            log::warn!("No options_path configured; the calendar will be empty");
            Vec::new()
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 520.0])
            .with_min_inner_size([360.0, 440.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Delivery Date Picker",
        native_options,
        Box::new(move |cc| Ok(Box::new(PickerApp::new(cc, settings, options)))),
    )
    .map_err(|e| anyhow!("failed to run picker window: {e}"))
}
