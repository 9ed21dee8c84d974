//! Rotaview Desktop Client - Tauri Application
//!
//! Shows a captured screen, window or tab full-frame in a borderless window
//! and lets the user rotate, zoom and reposition it.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod bridge;
mod commands;
mod config;
mod host;
mod state;

use std::sync::Arc;

use anyhow::Context;
use tauri::{Manager, RunEvent};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use config::AppConfig;
use host::MAIN_WINDOW;
use state::AppState;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("Invalid log filter")?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Starting Rotaview");

    let app = tauri::Builder::default()
        .setup(move |app| {
            let window = app
                .get_webview_window(MAIN_WINDOW)
                .context("Main window is missing from the configuration")?;
            let state = AppState::new(app.handle().clone(), window, &config);
            app.manage(Arc::new(state));

            info!("Application setup complete");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_view,
            commands::rotate,
            commands::zoom,
            commands::pointer_move,
            commands::toggle_edit_mode,
            commands::toggle_pin,
            commands::dismiss_error,
            commands::start_capture,
            commands::capture_response,
            commands::capture_ready,
            commands::track_ended,
            commands::stop_capture,
            commands::close_app,
        ])
        .build(tauri::generate_context!())
        .context("Error building Rotaview")?;

    app.run(|app, event| {
        if let RunEvent::Exit = event {
            // Release the capture on every exit path, not only the close button
            if let Some(state) = app.try_state::<Arc<AppState>>() {
                state.viewer.lock().stop_capture();
            }
            info!("Rotaview exited");
        }
    });

    Ok(())
}
