//! FarmSite - offline-capable bilingual client for the Farm Fresh dairy site
//!
//! Desktop shell for the farm's informational pages: bilingual text
//! switching, WhatsApp ordering links, a contact form, and an offline copy
//! of the published site.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use farmsite::app::FarmSiteApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Configure native options
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 850.0])
            .with_min_inner_size([380.0, 640.0])
            .with_title("Farm Fresh Organic Dairy")
            .with_app_id("FarmSite"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "FarmSite",
        native_options,
        Box::new(|cc| Ok(Box::new(FarmSiteApp::new(cc)))),
    )
}
