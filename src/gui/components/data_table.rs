// src/gui/components/data_table.rs
//
// Draws the filtered table, or an explicit "no data" panel when the
// selection yields nothing. Purely a view over app.headers / app.rows.

use eframe::egui::{ self, Align, Layout, RichText, TextWrapMode };
use egui_extras::{ Column, TableBuilder };
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.rows.is_empty() {
        let msg = match &app.no_data {
            Some(nd) => nd.to_string(),
            None => s!("No data available."),
        };
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(msg).strong().color(ui.visuals().warn_fg_color));
        });
        return;
    }

    let cols = app
        .headers
        .as_ref()
        .map(|h| h.len())
        .or_else(|| app.rows.first().map(|r| r.len()))
        .unwrap_or(0);

    // Numeric-looking columns are centered; text columns stay left-aligned.
    let numeric_cols: Vec<bool> = (0..cols)
        .map(|ci| app.rows.iter().all(|r| r.get(ci).map(|c| looks_numeric(c)).unwrap_or(true)))
        .collect();

    ui.label(format!("{} row(s)", app.rows.len()));

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("inner_table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("table_state", cols));
            for ci in 0..cols {
                let w = if ci == 0 { 280.0 } else if numeric_cols[ci] { 80.0 } else { 120.0 };
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for ci in 0..cols {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let text = app
                                .headers
                                .as_ref()
                                .and_then(|h| h.get(ci).cloned())
                                .unwrap_or_else(|| format!("Col {}", ci + 1));
                            ui.add(egui::Label::new(RichText::new(text).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, app.rows.len(), |mut row| {
                        let Some(data) = app.rows.get(row.index()) else { return };
                        for ci in 0..cols {
                            let cell = data.get(ci).map(|s| s.as_str()).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if numeric_cols[ci] {
                                    ui.centered_and_justified(|ui| { ui.label(cell); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                                }
                            });
                        }
                    });
                });
        });
}

fn looks_numeric(cell: &str) -> bool {
    let c = cell.trim();
    c.is_empty() || c.trim_end_matches('%').replace(',', "").parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::looks_numeric;

    #[test]
    fn numeric_detection() {
        assert!(looks_numeric("1.25"));
        assert!(looks_numeric("1,024"));
        assert!(looks_numeric("12%"));
        assert!(looks_numeric(""));
        assert!(!looks_numeric("2 BR"));
    }
}
