mod analytics;
mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::SalaryDashApp;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut state = AppState::default();

    // Optional dataset path on the command line; a load failure here is
    // fatal, unlike File → Open which only reports on the status line.
    if let Some(path) = std::env::args().nth(1).map(PathBuf::from) {
        let dataset = data::loader::load_file(&path)
            .with_context(|| format!("loading dataset from {}", path.display()))?;
        log::info!("Loaded {} salary records from {}", dataset.len(), path.display());
        state.set_dataset(dataset);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Salary Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(SalaryDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
