use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::{config, HttpWaitlistClient};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{theme, WaitlistApp};

#[derive(Parser, Debug)]
#[command(about = "Thumbsy landing page with waitlist signup")]
struct Args {
    /// Waitlist registration endpoint; overrides file and environment settings.
    #[arg(long)]
    endpoint: Option<String>,
    /// Settings file to read instead of ./waitlist.toml.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => config::load_settings_from(path, |name| std::env::var(name).ok()),
        None => config::load_settings(),
    }
    .context("failed to load waitlist settings")?
    .with_endpoint_override(args.endpoint.as_deref())?;
    tracing::info!(endpoint = %settings.endpoint_url, "starting waitlist window");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    let client = Arc::new(HttpWaitlistClient::new(settings.endpoint_url));
    let _backend = backend_bridge::runtime::launch(client, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Thumbsy")
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([480.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Thumbsy",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(theme::visuals());
            Ok(Box::new(WaitlistApp::new(cmd_tx, ui_rx)))
        }),
    )
    .map_err(|err| anyhow!("waitlist window failed: {err}"))
}
