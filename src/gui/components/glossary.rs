// src/gui/components/glossary.rs
use eframe::egui::{ self, RichText };

const TERMS: &[(&str, &str)] = &[
    ("ACS", "American Community Survey; the source of the pre-computed statistics."),
    ("Structure", "Housing type, tenure and bedroom count of a row, e.g. \"5-49 Units (Own) 2 BR\"."),
    ("Tenure", "Ownership status: Own, Rent, or both combined where the data does not split them."),
    ("VALUE_TENURE", "Housing value / rent bracket, an extra filter independent of Structure."),
    ("All units", "Every housing unit regardless of construction year."),
    ("Newer units", "Only recently built housing units."),
    ("Studio-1BR", "Display name for the \"0-1 BR\" bedroom range."),
];

pub fn draw(ui: &mut egui::Ui) {
    egui::ScrollArea::vertical()
        .id_salt("glossary_scroll")
        .max_height(260.0)
        .show(ui, |ui| {
            for (term, text) in TERMS {
                ui.label(RichText::new(*term).strong());
                ui.label(*text);
                ui.add_space(4.0);
            }
        });
}
