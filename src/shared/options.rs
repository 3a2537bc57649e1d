//! Zentrale Konfiguration für das Bézier-Polaren-Studio.
//!
//! `StudioOptions` enthält alle zur Laufzeit änderbaren Darstellungswerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten. Fachliche
//! Konstanten (Abtastschritt, Blend-Schrittweite, Stufen-Palette) sind
//! bewusst nicht konfigurierbar und leben bei ihren Typen im Kern.

use crate::core::Rgb;
use serde::{Deserialize, Serialize};

// ── Fenster ─────────────────────────────────────────────────────────

/// Fensterbreite beim Start in Pixeln.
pub const WINDOW_WIDTH: f32 = 800.0;
/// Fensterhöhe beim Start in Pixeln.
pub const WINDOW_HEIGHT: f32 = 600.0;
/// Fenstertitel.
pub const WINDOW_TITLE: &str = "Interactive Bezier Curve and Polars";

// ── Marker ──────────────────────────────────────────────────────────

/// Radius der Kontrollpunkt-Marker in Pixeln.
pub const MARKER_RADIUS: f32 = 5.0;
/// Füllfarbe der Kontrollpunkt-Marker (Rot).
pub const MARKER_COLOR: Rgb = [255, 0, 0];

// ── Kurven ──────────────────────────────────────────────────────────

/// Farbe der Basiskurve (Blau). Polaren-Farben kommen aus der Stufen-Palette.
pub const BASE_CURVE_COLOR: Rgb = [0, 0, 255];
/// Linienstärke aller Kurven in Pixeln.
pub const CURVE_STROKE_WIDTH: f32 = 2.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Darstellungs-Optionen.
/// Wird beim Start aus `bezier_polar_studio.toml` neben der Binary gelesen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioOptions {
    /// Radius der Kontrollpunkt-Marker in Pixeln
    pub marker_radius: f32,
    /// Füllfarbe der Kontrollpunkt-Marker
    pub marker_color: Rgb,
    /// Farbe der Basiskurve
    pub base_curve_color: Rgb,
    /// Linienstärke aller Kurven in Pixeln
    pub curve_stroke_width: f32,
}

impl Default for StudioOptions {
    fn default() -> Self {
        Self {
            marker_radius: MARKER_RADIUS,
            marker_color: MARKER_COLOR,
            base_curve_color: BASE_CURVE_COLOR,
            curve_stroke_width: CURVE_STROKE_WIDTH,
        }
    }
}

impl StudioOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_polar_studio"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_polar_studio.toml")
    }
}
