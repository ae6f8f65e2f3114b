// src/gui/components/structure_bar.rs
//
// Cascading structure dropdowns: combined option → bedroom range → value bracket.
// Each level is recomputed from the loaded dataset on every frame.

use eframe::egui;
use crate::{
    core::{ catalog::COMBINED_OPTIONS, structure::display_label },
    gui::app::App,
};

const ALL: &str = "All";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.raw.is_none() {
        ui.label("Structure filters are available once a dataset is loaded.");
        return;
    }

    // --- Combined option ---
    let mut idx = app.state.gui.option_index;
    ui.horizontal(|ui| {
        ui.label("Structure:");
        egui::ComboBox::from_id_salt("structure_combo")
            .width(380.0)
            .selected_text(app.current_option().label)
            .show_ui(ui, |ui| {
                for (i, opt) in COMBINED_OPTIONS.iter().enumerate() {
                    ui.selectable_value(&mut idx, i, opt.label);
                }
            });
    });
    app.select_option(idx);

    // --- Bedrooms (depends on option) ---
    let choices = app.bedroom_choices();
    let mut beds = app.state.gui.bedroom_range.clone();
    ui.horizontal(|ui| {
        ui.label("Bedrooms:");
        if choices.is_empty() {
            ui.label("none for this structure");
            return;
        }
        egui::ComboBox::from_id_salt("bedroom_combo")
            .selected_text(beds.as_deref().map(display_label).unwrap_or(ALL))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut beds, None, ALL);
                for b in &choices {
                    ui.selectable_value(&mut beds, Some(b.clone()), display_label(b));
                }
            });
    });
    app.select_bedrooms(beds);

    // --- Value bracket (depends on option + bedrooms) ---
    let values = app.value_choices();
    let mut value = app.state.gui.value_tenure.clone();
    if !values.is_empty() {
        ui.horizontal(|ui| {
            ui.label("Value / tenure:");
            egui::ComboBox::from_id_salt("value_combo")
                .selected_text(value.as_deref().unwrap_or(ALL))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut value, None, ALL);
                    for v in &values {
                        ui.selectable_value(&mut value, Some(v.clone()), v.as_str());
                    }
                });
        });
    }
    app.select_value(value);

    if let Some(key) = app.current_filter().key() {
        ui.label(egui::RichText::new(format!("Key: {key}")).monospace().weak());
    }
}
