//! SyncSafe — finds and fixes OneDrive-incompatible file and folder names.
//!
//! Thin binary entry point. All logic lives in the `syncsafe-core`
//! and `syncsafe-gui` crates.
//!
//! Usage: `SyncSafe [FOLDER]` — when a folder is given it is scanned on
//! start-up.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("SyncSafe starting");

    let initial_root = std::env::args_os().nth(1).map(PathBuf::from);

    // Build application state *before* opening the window so a command-line
    // scan is finished by the time the first frame renders.
    let state = syncsafe_gui::SyncSafeState::build(initial_root);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("SyncSafe -- OneDrive Name Sanitizer")
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SyncSafe",
        options,
        Box::new(|cc| Ok(Box::new(syncsafe_gui::SyncSafeApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
