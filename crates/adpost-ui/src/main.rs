#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod context;
mod helpers;
mod modules;
mod paths;
mod previews;
mod theme;

fn main() -> eframe::Result {
    helpers::log::init();
    let config = config::AppConfig::load();

    let native_options = eframe::NativeOptions {
        centered: true,
        viewport: egui::ViewportBuilder::default()
            .with_title("AdPost")
            .with_inner_size([820.0, 960.0])
            .with_min_inner_size([560.0, 600.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "AdPost",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::AdPostApp::new(cc, config)))),
    )
}
