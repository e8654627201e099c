use eframe::egui;

use crate::config::ApiConfig;
use crate::inventory::form::{AVAILABLE_UI_FALSE, AVAILABLE_UI_TRUE};
use crate::inventory::prelude::*;
use crate::inventory::results::RESULT_COLUMNS;
use crate::wasm_utils;

/// Main Inventory form application
pub struct InventoryApp {
    controller: Option<InventoryController>,
    startup_error: Option<String>,
}

impl InventoryApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ApiConfig) -> Self {
        wasm_utils::set_panic_hook();
        wasm_utils::console_log(&format!("Starting inventory form against {}", config.base_url));

        match InventoryController::from_config(&config) {
            Ok(controller) => Self {
                controller: Some(controller),
                startup_error: None,
            },
            Err(e) => {
                log::error!("Failed to create inventory client: {}", e);
                Self {
                    controller: None,
                    startup_error: Some(e.to_string()),
                }
            }
        }
    }
}

impl eframe::App for InventoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let Some(controller) = self.controller.as_mut() else {
            egui::CentralPanel::default().show(ctx, |ui| {
                let error = self.startup_error.as_deref().unwrap_or("unknown error");
                ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
            });
            return;
        };

        controller.update_from_async();
        if controller.has_pending_requests() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Inventory REST API Service");
                if controller.has_pending_requests() {
                    ui.spinner();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                render_form(ui, controller);
                ui.add_space(10.0);
                render_buttons(ui, controller);
                ui.add_space(10.0);
                render_message(ui, controller.state());
                ui.add_space(10.0);
                render_results(ui, controller.state());
            });
        });
    }
}

fn render_form(ui: &mut egui::Ui, controller: &mut InventoryController) {
    let form = controller.form_mut();

    ui.group(|ui| {
        egui::Grid::new("inventory_form")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Product ID:");
                ui.text_edit_singleline(&mut form.product_id);
                ui.end_row();

                ui.label("Condition:");
                egui::ComboBox::new("inventory_condition", "")
                    .selected_text(form.condition.as_str())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut form.condition, String::new(), "");
                        for condition in Condition::ALL {
                            ui.selectable_value(
                                &mut form.condition,
                                condition.as_ui().to_string(),
                                condition.as_ui(),
                            );
                        }
                    });
                ui.end_row();

                ui.label("Quantity:");
                ui.text_edit_singleline(&mut form.quantity);
                ui.end_row();

                ui.label("Restock Level:");
                ui.text_edit_singleline(&mut form.restock_level);
                ui.end_row();

                ui.label("Available:");
                egui::ComboBox::new("inventory_available", "")
                    .selected_text(form.available.as_str())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut form.available, String::new(), "");
                        ui.selectable_value(&mut form.available, AVAILABLE_UI_TRUE.to_string(), AVAILABLE_UI_TRUE);
                        ui.selectable_value(&mut form.available, AVAILABLE_UI_FALSE.to_string(), AVAILABLE_UI_FALSE);
                    });
                ui.end_row();
            });
    });
}

fn render_buttons(ui: &mut egui::Ui, controller: &mut InventoryController) {
    ui.horizontal_wrapped(|ui| {
        for action in InventoryAction::ALL {
            let hint = if action.is_async() {
                action.description()
            } else {
                "Clears the form without contacting the server"
            };
            if ui.button(action.label()).on_hover_text(hint).clicked() {
                controller.dispatch(action);
            }
        }
    });
}

fn render_message(ui: &mut egui::Ui, state: &InventoryState) {
    if state.has_message() {
        ui.group(|ui| {
            ui.label(&state.message);
        });
    }
}

fn render_results(ui: &mut egui::Ui, state: &InventoryState) {
    let Some(table) = &state.results else {
        return;
    };

    egui::Grid::new("search_results")
        .num_columns(RESULT_COLUMNS.len())
        .striped(true)
        .spacing([20.0, 6.0])
        .show(ui, |ui| {
            for column in RESULT_COLUMNS {
                ui.strong(column);
            }
            ui.end_row();

            for row in table.rows() {
                for cell in row {
                    ui.label(cell);
                }
                ui.end_row();
            }
        });
}
