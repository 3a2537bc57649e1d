//! Zeichenfläche: Kurven, Polaren und Marker als egui-Painter-Overlay.

use eframe::egui;
use glam::DVec2;

use super::{input, keyboard};
use crate::app::AppIntent;
use crate::core::Rgb;
use crate::shared::RenderPlan;

/// Rendert die Zeichenfläche und sammelt Eingabe-Intents.
pub fn render_canvas_panel(ctx: &egui::Context, plan: &RenderPlan) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            events.extend(keyboard::collect_keyboard_intents(ui));

            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click());
            events.extend(input::collect_canvas_intents(&response));

            paint_plan(ui.painter(), rect, plan);

            if plan.markers.is_empty() {
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Click to place control points",
                    egui::FontId::proportional(20.0),
                    egui::Color32::WHITE,
                );
            }
        });

    events
}

/// Zeichnet alle Linienzüge und Marker des Plans.
fn paint_plan(painter: &egui::Painter, rect: egui::Rect, plan: &RenderPlan) {
    for polyline in &plan.polylines {
        let points: Vec<egui::Pos2> = polyline
            .points
            .iter()
            .map(|p| canvas_pos(rect, *p))
            .collect();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(plan.options.curve_stroke_width, rgb_color(polyline.color)),
        ));
    }

    // Marker über den Kurven, damit Kontrollpunkte sichtbar bleiben
    for marker in &plan.markers {
        painter.circle_filled(
            canvas_pos(rect, *marker),
            plan.options.marker_radius,
            rgb_color(plan.options.marker_color),
        );
    }
}

/// Rechnet Canvas-lokale Koordinaten in Screen-Koordinaten um.
fn canvas_pos(rect: egui::Rect, p: DVec2) -> egui::Pos2 {
    egui::pos2(rect.min.x + p.x as f32, rect.min.y + p.y as f32)
}

/// Konvertiert einen RGB-Wert in eine egui-Farbe.
fn rgb_color(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color[0], color[1], color[2])
}
