//! Coin Viewer binary: logging, configuration, runtime, window.

use coin_viewer::app::ViewerApp;
use coin_viewer::core::ViewerConfig;
use coin_viewer::debug::{self, DebugConfig};
use coin_viewer::utils::runtime::build_runtime;

const APP_NAME: &str = "Coin Viewer";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _log_guard = debug::init();

    let debug_config = DebugConfig::from_env();
    let config = ViewerConfig::from_env();
    tracing::info!(
        api_base = %config.api_base,
        history_base = %config.history_base,
        start_path = %config.start_path,
        "Configuration loaded"
    );

    let runtime = build_runtime()?;
    let _enter = runtime.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(coin_viewer::app::state::COINS_TITLE)
            .with_inner_size([520.0, 860.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    let inspector_visible = debug_config.show_query_inspector;
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(cc, config, inspector_visible)))),
    )?;

    tracing::info!("Viewer closed");
    Ok(())
}
