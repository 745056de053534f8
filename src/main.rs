//! Folio - A personal portfolio viewer written in Rust
//!
//! Folio is a desktop application presenting a personal portfolio: a hero
//! landing page, a projects listing with per-project write-ups (charts,
//! tables, figures), and a resume page. All content is bundled; the only I/O
//! is reading static asset files.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use folio::app::FolioApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Configure native options
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 700.0])
            .with_title("Folio")
            .with_app_id("Folio"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Folio",
        native_options,
        Box::new(|cc| Ok(Box::new(FolioApp::new(cc)))),
    )
}
