//! Property form and valuation panel.

use client_core::{
    EstimationController, EstimationResult, FormField, LocationCatalog, ESTIMATE_ERROR_MESSAGE,
};
use crossbeam_channel::Sender;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{orchestration, reducer::AppModel};

const LOCATION_PLACEHOLDER: &str = "Select location";

pub fn property_form(ui: &mut egui::Ui, model: &mut AppModel, cmd_tx: &Sender<BackendCommand>) {
    ui.heading("Property Configuration");
    ui.label("Enter your property details for a valuation");
    ui.add_space(12.0);

    egui::Grid::new("property_form")
        .num_columns(2)
        .spacing([16.0, 10.0])
        .show(ui, |ui| {
            text_field(
                ui,
                &mut model.estimation,
                FormField::TotalSqft,
                "Total Area (Square Feet)",
                "e.g., 1200",
            );
            text_field(
                ui,
                &mut model.estimation,
                FormField::Bhk,
                "Bedrooms (BHK)",
                "e.g., 3",
            );
            text_field(
                ui,
                &mut model.estimation,
                FormField::Bath,
                "Bathrooms",
                "e.g., 2",
            );
            ui.label("Location");
            location_selector(ui, &model.catalog, &mut model.estimation);
            ui.end_row();
        });

    ui.add_space(16.0);
    let loading = model.estimation.is_loading();
    let label = if loading {
        "Analyzing property..."
    } else {
        "Estimate Price"
    };
    ui.horizontal(|ui| {
        let button = egui::Button::new(label).min_size(egui::vec2(220.0, 36.0));
        if ui.add_enabled(model.estimation.can_submit(), button).clicked() {
            orchestration::request_estimate(model, cmd_tx);
        }
        if loading {
            ui.spinner();
        }
    });
}

fn text_field(
    ui: &mut egui::Ui,
    controller: &mut EstimationController,
    field: FormField,
    label: &str,
    hint: &str,
) {
    ui.label(label);
    let mut value = controller.field(field).to_string();
    let edit = egui::TextEdit::singleline(&mut value)
        .hint_text(hint)
        .desired_width(220.0);
    if ui.add(edit).changed() {
        controller.set_field(field, value);
    }
    ui.end_row();
}

fn location_selector(
    ui: &mut egui::Ui,
    catalog: &LocationCatalog,
    controller: &mut EstimationController,
) {
    let selected = controller.field(FormField::Location).to_string();
    let selected_text = if selected.is_empty() {
        LOCATION_PLACEHOLDER
    } else {
        selected.as_str()
    };
    egui::ComboBox::from_id_salt("location_selector")
        .selected_text(selected_text)
        .width(220.0)
        .show_ui(ui, |ui| {
            if ui
                .selectable_label(selected.is_empty(), LOCATION_PLACEHOLDER)
                .clicked()
            {
                controller.set_field(FormField::Location, "");
            }
            for name in catalog.names() {
                if ui
                    .selectable_label(selected == *name, name.as_str())
                    .clicked()
                {
                    controller.set_field(FormField::Location, name.clone());
                }
            }
        });
}

pub fn result_panel(ui: &mut egui::Ui, controller: &EstimationController) {
    ui.heading("Valuation");
    ui.add_space(12.0);
    match controller.result() {
        Some(EstimationResult::Estimate(text)) => {
            ui.label("Estimated Market Value");
            ui.label(
                egui::RichText::new(format!("\u{20b9}{text}"))
                    .size(32.0)
                    .strong(),
            );
        }
        Some(EstimationResult::Error) => {
            ui.colored_label(ui.visuals().error_fg_color, ESTIMATE_ERROR_MESSAGE);
        }
        None => {
            ui.label(egui::RichText::new("Ready for Analysis").strong());
            ui.label("Complete all property details and press \"Estimate Price\" to receive a market price estimate.");
        }
    }
}
