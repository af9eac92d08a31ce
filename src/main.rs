//! Sum-difference Gomoku GUI
//!
//! Two players share the mouse: click an intersection, pick a stone value.

use std::path::Path;

use anyhow::Context;
use sumdiff::config::{AppConfig, DEFAULT_CONFIG_PATH};
use sumdiff::ui::SumDiffApp;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH))
        .with_context(|| format!("loading {}", DEFAULT_CONFIG_PATH))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([600.0, 500.0])
            .with_title("합차 오목 - Sum-Difference Gomoku"),
        ..Default::default()
    };

    log::info!("starting GUI");
    eframe::run_native(
        "Sum-Difference Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(SumDiffApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}
