//! NasBot — home NAS dashboard.
//!
//! Thin binary entry point. All logic lives in the `nasbot-core` and
//! `nasbot-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context as _;
use clap::Parser;
use nasbot_core::config::DashboardConfig;
use std::path::PathBuf;

/// Watch a shared folder and show what changes in it.
#[derive(Parser, Debug)]
#[command(name = "nasbot", version, about)]
struct Cli {
    /// Directory to watch (overrides the config file).
    #[arg(env = "NASBOT_WATCH_PATH")]
    path: Option<PathBuf>,

    /// JSON config file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    let watch_path = config.resolve_watch_path(cli.path);

    tracing::info!("NasBot starting on {}", watch_path.display());

    // Start the watcher before opening the window so a missing or
    // unreadable directory fails here, with no half-working UI.
    let state = nasbot_gui::NasBotState::build(&config, watch_path)
        .context("startup failed")
        .inspect_err(|e| tracing::error!("{e:#}"))?;

    let icon = nasbot_gui::icon::generate_icon(64);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(state.title())
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([640.0, 480.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "NasBot",
        options,
        Box::new(|cc| Ok(Box::new(nasbot_gui::NasBotApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    tracing::info!("NasBot exiting");
    Ok(())
}
