use std::sync::Arc;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::anyhow;
use backend_bridge::commands::BackendCommand;
use clap::Parser;
use client_core::{config::load_client_settings, ValuationClient};
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use ui::EstimatorApp;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the valuation service; overrides estimator.toml and env.
    #[arg(long)]
    service_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let mut settings = load_client_settings();
    if let Some(url) = args.service_url {
        settings.service_url = url;
    }
    let client = ValuationClient::from_settings(&settings)?;
    tracing::info!(service_url = %client.base_url(), "using valuation service");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(Arc::new(client), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Home Price Estimator")
            .with_inner_size([900.0, 560.0])
            .with_min_inner_size([720.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Home Price Estimator",
        options,
        Box::new(|_cc| Ok(Box::new(EstimatorApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("desktop window failed: {err}"))
}
