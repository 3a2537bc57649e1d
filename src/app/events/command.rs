use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Kontrollpunkt an Canvas-Position anhängen
    AddControlPoint { pos: DVec2 },
    /// Alle Kontrollpunkte entfernen
    ClearControlPoints,
    /// Blendparameter t₁ um eine Schrittweite erhöhen
    IncreaseBlend,
    /// Blendparameter t₁ um eine Schrittweite verringern
    DecreaseBlend,
    /// Polaren-Stufe erhöhen
    IncreaseLevel,
    /// Polaren-Stufe verringern
    DecreaseLevel,
    /// Anwendung beenden
    RequestExit,
}
