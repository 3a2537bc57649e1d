//! Render-Plan als expliziter Übergabevertrag zwischen App und UI.
//!
//! Lebt im shared-Modul, da `app` ihn baut und `ui` ihn konsumiert.

use super::options::StudioOptions;
use crate::core::Rgb;
use glam::DVec2;

/// Ein zu zeichnender Linienzug mit fertig zugewiesener Farbe.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Stützpunkte in Canvas-Koordinaten
    pub points: Vec<DVec2>,
    /// RGB-Farbe des Linienzugs
    pub color: Rgb,
}

/// Read-only Daten für einen Render-Frame.
///
/// Wird bei jeder Abfrage vollständig neu aus dem Szenen-Zustand abgeleitet;
/// gleicher Zustand ergibt bitgenau den gleichen Plan (`PartialEq`).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Linienzüge in Zeichenreihenfolge: Basiskurve zuerst, dann Polaren
    pub polylines: Vec<Polyline>,
    /// Marker-Positionen (die aktuellen Kontrollpunkte)
    pub markers: Vec<DVec2>,
    /// Aktueller Blendparameter t₁ für die Statusanzeige
    pub blend: f64,
    /// Aktuelle Polaren-Stufe für die Statusanzeige
    pub polar_level: u32,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: StudioOptions,
}

impl RenderPlan {
    /// Gibt zurück, ob mindestens ein Linienzug zu zeichnen ist.
    pub fn has_polylines(&self) -> bool {
        !self.polylines.is_empty()
    }
}
