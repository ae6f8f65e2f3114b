// src/gui/components/map_view.rs
//
// State outline + centroid, drawn with the egui painter.
// Independent of the table path: a missing state or boundary only affects this panel.

use eframe::egui::{ self, Color32, Pos2, Sense, Shape, Stroke, Vec2 };
use crate::{ geo::Projection, gui::app::App };

const OUTLINE: Color32 = Color32::from_rgb(255, 0, 0);
const CENTROID: Color32 = Color32::from_rgb(0, 0, 255);
const MARGIN: f64 = 12.0;
const CENTROID_ONLY_SPAN_DEG: f64 = 4.0;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.heading(app.state.options.browse.state.as_str());

    let Some(map) = app.map() else {
        ui.label("Map not available for this state.");
        return;
    };
    ui.label(format!("Centroid: {:.4}, {:.4}", map.state.lat, map.state.lon));

    let side = ui.available_width().max(120.0);
    let (response, painter) = ui.allocate_painter(Vec2::new(side, side), Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);

    let (w, h) = (rect.width() as f64, rect.height() as f64);
    let proj = match map.boundary.and_then(|b| b.bbox()) {
        Some(bbox) => Projection::fit(bbox, w, h, MARGIN),
        None => Projection::around(map.state.lon, map.state.lat, CENTROID_ONLY_SPAN_DEG, w, h),
    };
    let to_screen = |lon: f64, lat: f64| {
        let (x, y) = proj.apply(lon, lat);
        Pos2::new(rect.min.x + x as f32, rect.min.y + y as f32)
    };

    if let Some(boundary) = map.boundary {
        for ring in &boundary.rings {
            if ring.len() < 2 { continue; }
            let pts: Vec<Pos2> = ring.iter().map(|p| to_screen(p[0], p[1])).collect();
            painter.add(Shape::closed_line(pts, Stroke::new(2.0, OUTLINE)));
        }
    } else {
        ui.label("Boundary not available; showing centroid only.");
    }

    painter.circle_filled(to_screen(map.state.lon, map.state.lat), 5.0, CENTROID);

    response.on_hover_text(format!("{} ({:.4}, {:.4})", map.state.name, map.state.lat, map.state.lon));
}
