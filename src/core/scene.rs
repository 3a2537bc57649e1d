//! Szenen-Zustand: Kontrollpunkte, Blendparameter t₁ und Polaren-Stufe.

use glam::DVec2;

use super::polar::polar_reduce;

/// Zustand der interaktiven Szene.
///
/// Alle Übergänge sind total: Schrittoperationen sättigen an ihren Grenzen,
/// statt zu fehlschlagen. Abfragen verändern den Zustand nie.
#[derive(Debug, Clone)]
pub struct SceneState {
    control_points: Vec<DVec2>,
    blend: f64,
    polar_level: u32,
}

impl SceneState {
    /// Schrittweite für Blend-Anpassungen.
    pub const BLEND_STEP: f64 = 0.1;

    /// Erstellt die Startszene: keine Punkte, t₁ = 0.5, Stufe 1.
    pub fn new() -> Self {
        Self {
            control_points: Vec::new(),
            blend: 0.5,
            polar_level: 1,
        }
    }

    /// Hängt einen Kontrollpunkt ans Ende der Folge an.
    pub fn add_point(&mut self, pos: DVec2) {
        self.control_points.push(pos);
    }

    /// Entfernt alle Kontrollpunkte. Blend und Stufe bleiben erhalten.
    pub fn clear_points(&mut self) {
        self.control_points.clear();
    }

    /// Erhöht t₁ um eine Schrittweite, gesättigt bei 1.0.
    pub fn increase_blend(&mut self) {
        self.blend = (self.blend + Self::BLEND_STEP).min(1.0);
    }

    /// Verringert t₁ um eine Schrittweite, gesättigt bei 0.0.
    pub fn decrease_blend(&mut self) {
        self.blend = (self.blend - Self::BLEND_STEP).max(0.0);
    }

    /// Erhöht die Polaren-Stufe. Nach oben unbegrenzt.
    pub fn increase_level(&mut self) {
        self.polar_level = self.polar_level.saturating_add(1);
    }

    /// Verringert die Polaren-Stufe, Untergrenze 1.
    pub fn decrease_level(&mut self) {
        self.polar_level = self.polar_level.saturating_sub(1).max(1);
    }

    pub fn control_points(&self) -> &[DVec2] {
        &self.control_points
    }

    pub fn blend(&self) -> f64 {
        self.blend
    }

    pub fn polar_level(&self) -> u32 {
        self.polar_level
    }

    /// Berechnet die Polaren-Kette bis zur eingestellten Stufe.
    ///
    /// Jede Stufe reduziert die vorige Punktfolge mit [`polar_reduce`].
    /// Eine Stufe mit weniger als zwei Punkten beschreibt keine Kurve mehr;
    /// dort bricht die Kette ab, auch wenn die eingestellte Stufe höher ist.
    /// Dadurch bleibt der Aufwand auch bei riesigen Stufenwerten beschränkt.
    pub fn polar_chain(&self) -> Vec<(u32, Vec<DVec2>)> {
        let mut chain: Vec<(u32, Vec<DVec2>)> = Vec::new();
        for stufe in 1..=self.polar_level {
            let source = chain
                .last()
                .map(|(_, pts)| pts.as_slice())
                .unwrap_or(&self.control_points);
            let reduced = polar_reduce(source, self.blend);
            if reduced.len() < 2 {
                break;
            }
            chain.push((stufe, reduced));
        }
        chain
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}
