//! Klick-Events auf der Zeichenfläche.

use crate::app::AppIntent;
use glam::DVec2;

/// Verarbeitet Primärklicks auf die Zeichenfläche.
///
/// Die Klickposition wird in Canvas-lokale Koordinaten umgerechnet
/// (Ursprung oben links der Zeichenfläche), damit der Szenen-Zustand
/// unabhängig von Panel-Layout und Fensterposition bleibt.
pub(super) fn collect_canvas_intents(response: &egui::Response) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if response.clicked_by(egui::PointerButton::Primary) {
        if let Some(pointer_pos) = response.interact_pointer_pos() {
            let local = pointer_pos - response.rect.min;
            events.push(AppIntent::CanvasClicked {
                pos: DVec2::new(f64::from(local.x), f64::from(local.y)),
            });
        }
    }

    events
}
