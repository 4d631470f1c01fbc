#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based Jobpilot UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use jobpilot::backend::BackendClient;
use jobpilot::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use jobpilot::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let backend = BackendClient::from_env();
    tracing::info!("Using backend at {}", backend.base_url());

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(1080.0, 720.0));

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Jobpilot",
        native_options,
        Box::new(move |_cc| Ok(Box::new(EguiApp::new(backend)))),
    )?;
    Ok(())
}
