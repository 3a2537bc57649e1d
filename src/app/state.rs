//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::SceneState;
use crate::shared::StudioOptions;

/// Zentraler Anwendungszustand.
///
/// Alle Mutationen laufen über den `AppController`; die UI liest nur.
#[derive(Default)]
pub struct AppState {
    /// Fachlicher Szenen-Zustand (Kontrollpunkte, t₁, Polaren-Stufe)
    pub scene: SceneState,
    /// Laufzeit-Optionen (Farben, Größen)
    pub options: StudioOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            scene: SceneState::new(),
            options: StudioOptions::default(),
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück
    pub fn point_count(&self) -> usize {
        self.scene.control_points().len()
    }
}
