use anyhow::{anyhow, Result};
use eframe::egui::{self, Vec2};

use themed_todo::config::AppConfig;
use themed_todo::logging;
use themed_todo::ui::app::TodoApp;
use themed_todo::ui::icons::create_app_icon;

fn main() -> Result<()> {
    // La configuration est chargée avant les logs, l'erreur est signalée ensuite
    let (config, load_error) = match AppConfig::default_path() {
        Some(path) => match AppConfig::load_from_file(&path) {
            Ok(config) => (config, None),
            Err(e) => (AppConfig::default(), Some(e)),
        },
        None => (AppConfig::default(), None),
    };

    let _log_guard = logging::init(&config);
    if let Some(e) = load_error {
        tracing::warn!("Using default configuration: {}", e);
    }
    tracing::info!(
        "Starting themed-todo v{} ({}x{})",
        env!("CARGO_PKG_VERSION"),
        config.window_width,
        config.window_height
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(Vec2::new(config.window_width, config.window_height))
            .with_min_inner_size(Vec2::new(400.0, 300.0))
            .with_icon(create_app_icon()),
        centered: true,
        default_theme: eframe::Theme::Light,
        follow_system_theme: false,
        vsync: true,
        ..Default::default()
    };

    eframe::run_native(
        "Themed Todo",
        options,
        Box::new(|cc| Box::new(TodoApp::new(cc))),
    )
    .map_err(|e| anyhow!("UI loop failed: {e}"))
}
