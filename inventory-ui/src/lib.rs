#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod config;
pub mod http_client;
pub mod inventory;
pub mod wasm_utils;

/// WASM entry point for the inventory form
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), wasm_bindgen::JsValue> {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();
    let canvas_id = canvas_id.to_string();
    let config = config::ApiConfig::from_location();

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&canvas_id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        .ok_or_else(|| JsValue::from_str(&format!("canvas element '{}' not found", canvas_id)))?;

    wasm_utils::spawn_async(async move {
        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| {
                    cc.egui_ctx.set_visuals(egui::Visuals::light());
                    Ok(Box::new(app::InventoryApp::new(cc, config)))
                }),
            )
            .await;

        if let Err(e) = start_result {
            wasm_utils::console_log(&format!("Failed to start eframe: {:?}", e));
        }
    });

    Ok(())
}
