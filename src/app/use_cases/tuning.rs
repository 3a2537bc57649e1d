//! Use-Case-Funktionen für Blendparameter und Polaren-Stufe.

use crate::app::AppState;

/// Erhöht t₁ um eine Schrittweite (gesättigt bei 1.0).
pub fn increase_blend(state: &mut AppState) {
    state.scene.increase_blend();
    log::info!("t1 erhöht auf {:.2}", state.scene.blend());
}

/// Verringert t₁ um eine Schrittweite (gesättigt bei 0.0).
pub fn decrease_blend(state: &mut AppState) {
    state.scene.decrease_blend();
    log::info!("t1 verringert auf {:.2}", state.scene.blend());
}

/// Erhöht die Polaren-Stufe.
pub fn increase_level(state: &mut AppState) {
    state.scene.increase_level();
    log::info!("Polaren-Stufe erhöht auf {}", state.scene.polar_level());
}

/// Verringert die Polaren-Stufe (Untergrenze 1).
pub fn decrease_level(state: &mut AppState) {
    state.scene.decrease_level();
    log::info!("Polaren-Stufe verringert auf {}", state.scene.polar_level());
}
