// src/gui/components/selector_panel.rs
//
// Left panel: state / unit type / category. Any change reloads the dataset
// and restarts the structure cascade.

use std::path::PathBuf;

use eframe::egui;
use crate::{
    config::options::{ Category, UnitType },
    geo,
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Select Options");
    ui.add_space(4.0);

    let browse = &mut app.state.options.browse;
    let before = browse.clone();

    ui.label("State:");
    egui::ComboBox::from_id_salt("state_combo")
        .width(200.0)
        .selected_text(browse.state.as_str())
        .show_ui(ui, |ui| {
            for name in geo::states::names() {
                ui.selectable_value(&mut browse.state, s!(name), name);
            }
        });

    ui.add_space(4.0);
    ui.label("Unit type:");
    ui.horizontal(|ui| {
        for u in UnitType::ALL {
            ui.radio_value(&mut browse.unit_type, u, u.label());
        }
    });

    ui.add_space(4.0);
    ui.label("Data category:");
    egui::ComboBox::from_id_salt("category_combo")
        .width(200.0)
        .selected_text(browse.category.label())
        .show_ui(ui, |ui| {
            for c in Category::ALL {
                ui.selectable_value(&mut browse.category, c, c.label());
            }
        });

    if *browse != before {
        logf!(
            "UI: Selection → {} / {} / {}",
            browse.state,
            browse.unit_type.label(),
            browse.category.label()
        );
        app.reload_dataset();
    }

    ui.separator();

    ui.label("Data folder:");
    ui.horizontal(|ui| {
        ui.add(egui::TextEdit::singleline(&mut app.data_dir_text).desired_width(150.0));
        if ui.button("Reload").clicked() {
            app.state.options.browse.data_dir = PathBuf::from(app.data_dir_text.trim());
            logf!("UI: Data dir → {}", app.state.options.browse.data_dir.display());
            app.reload_boundaries();
            app.reload_dataset();
        }
    });

    ui.separator();
    ui.checkbox(&mut app.state.gui.show_map, "Show map");
    ui.checkbox(&mut app.state.gui.show_glossary, "Show glossary");

    if app.state.gui.show_glossary {
        ui.separator();
        super::glossary::draw(ui);
    }
}
