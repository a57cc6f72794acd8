// Room Booking Application
// Main entry point

use anyhow::{anyhow, Result};
use room_booking::services::settings::SettingsService;
use room_booking::ui_egui::BookingApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Room Booking Application");

    let settings_service = SettingsService::from_project_dirs();
    if let Some(path) = settings_service.path() {
        log::info!("Reading settings from {}", path.display());
    }
    let settings = settings_service.load_or_default();
    let mut app = BookingApp::new(settings)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SmartMotion - Room Booking")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SmartMotion Room Booking",
        options,
        Box::new(move |cc| {
            app.set_repaint_context(cc.egui_ctx.clone());
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow!("Failed to run the booking window: {}", err))
}
