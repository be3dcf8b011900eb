mod app;
mod catalog;
mod forms;
mod reconcile;
mod store;
mod views;
mod worker;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use echoroom_client::ApiClient;

use crate::app::EchoRoomApp;

const DEFAULT_API_URL: &str = "http://localhost:5001/api";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("ECHOROOM_API").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let api = ApiClient::new(base_url);
    info!(base_url = api.base_url(), "starting EchoRoom");

    let runtime = tokio::runtime::Runtime::new()?;
    let handle = runtime.handle().clone();

    let (command_tx, command_rx) = tokio::sync::mpsc::unbounded_channel();
    let (update_tx, update_rx) = std::sync::mpsc::channel();

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(520.0, 680.0)),
        ..Default::default()
    };
    eframe::run_native(
        "EchoRoom",
        options,
        Box::new(move |cc| {
            handle.spawn(worker::run(api, command_rx, update_tx, cc.egui_ctx.clone()));
            Box::new(EchoRoomApp::new(command_tx, update_rx))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the ui: {e}"))?;
    Ok(())
}
