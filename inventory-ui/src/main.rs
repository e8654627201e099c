// Desktop entry point for the inventory form
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(not(target_arch = "wasm32"))]
use inventory_ui::{app::InventoryApp, config::ApiArgs};

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(about = "Inventory form for the inventory REST API")]
struct Args {
    #[command(flatten)]
    api: ApiArgs,
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Args::parse().api.into_config();
    log::info!("Inventory API at {}{}", config.base_url, config.api_prefix);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("Inventory"),
        ..Default::default()
    };

    eframe::run_native(
        "Inventory",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(InventoryApp::new(cc, config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run inventory form: {}", e))
}

// The browser build starts through `inventory_ui::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}
