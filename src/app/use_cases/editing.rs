//! Use-Case-Funktionen zum Bearbeiten der Kontrollpunkt-Folge.

use crate::app::AppState;
use glam::DVec2;

/// Hängt einen Kontrollpunkt an der geklickten Canvas-Position an.
pub fn add_control_point(state: &mut AppState, pos: DVec2) {
    state.scene.add_point(pos);
    log::info!(
        "Kontrollpunkt {} an Position ({:.1}, {:.1}) hinzugefügt",
        state.scene.control_points().len(),
        pos.x,
        pos.y
    );
}

/// Entfernt alle Kontrollpunkte. Blend und Stufe bleiben erhalten.
pub fn clear_control_points(state: &mut AppState) {
    let count = state.scene.control_points().len();
    state.scene.clear_points();
    log::info!("{count} Kontrollpunkte entfernt");
}
