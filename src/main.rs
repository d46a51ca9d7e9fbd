// Festival Countdown
// Main entry point

use anyhow::Context;

use festival_countdown::services::config::{load_config, resolve_config_path};
use festival_countdown::ui_egui::CountdownApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Festival Countdown");

    let config_path = resolve_config_path();
    let (config, source) = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    log::info!("Configuration source: {:?}", source);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Festival Countdown")
            .with_inner_size(config.window_size())
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Festival Countdown",
        options,
        Box::new(|cc| Ok(Box::new(CountdownApp::new(cc, config)))),
    )
    .map_err(|err| anyhow::anyhow!("Festival Countdown exited with an error: {err}"))
}
