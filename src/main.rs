#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::fs::File;

fn main() {
    // File logging (the webview host swallows stderr on Windows).
    let log_path = dirs::home_dir()
        .map(|p| p.join("goose-desktop.log"))
        .unwrap_or_else(|| std::path::PathBuf::from("goose-desktop.log"));

    if let Ok(file) = File::create(&log_path) {
        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .filter_level(log::LevelFilter::Info)
            .init();
        log::info!("Logging to {:?}", log_path);
    } else {
        // Fallback to default (stderr)
        env_logger::init();
    }

    goose_desktop::run()
}
