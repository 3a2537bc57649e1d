use glam::DVec2;

/// Richtung einer Schritt-Anpassung (Blend oder Stufe).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustDirection {
    Increase,
    Decrease,
}

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Klick auf die Zeichenfläche (Canvas-lokale Koordinaten)
    CanvasClicked { pos: DVec2 },
    /// Alle Kontrollpunkte entfernen
    ClearPointsRequested,
    /// Blendparameter t₁ schrittweise anpassen
    BlendAdjustRequested { direction: AdjustDirection },
    /// Polaren-Stufe schrittweise anpassen
    LevelAdjustRequested { direction: AdjustDirection },
    /// Anwendung beenden
    ExitRequested,
}
