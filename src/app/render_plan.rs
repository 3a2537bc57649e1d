//! Builder für Render-Pläne aus dem AppState.

use crate::app::AppState;
use crate::core::{polar_level_color, sample_polyline, SAMPLE_STEP};
use crate::shared::{Polyline, RenderPlan};

/// Baut einen RenderPlan aus dem aktuellen AppState.
///
/// Reine Ableitung ohne Seiteneffekte: gleicher Zustand ergibt bitgenau
/// denselben Plan. Die Basiskurve erscheint ab zwei Kontrollpunkten, danach
/// folgen die Polaren aus der Ketten-Abfrage mit der Stufen-Palette. Jede
/// Stufe wird als eigene Bézier-Kurve über ihren reduzierten Punkten
/// abgetastet.
pub fn build(state: &AppState) -> RenderPlan {
    let scene = &state.scene;
    let mut polylines = Vec::new();

    if scene.control_points().len() >= 2 {
        polylines.push(Polyline {
            points: sample_polyline(scene.control_points(), SAMPLE_STEP),
            color: state.options.base_curve_color,
        });
    }

    for (stufe, points) in scene.polar_chain() {
        polylines.push(Polyline {
            points: sample_polyline(&points, SAMPLE_STEP),
            color: polar_level_color(stufe),
        });
    }

    RenderPlan {
        polylines,
        markers: scene.control_points().to_vec(),
        blend: scene.blend(),
        polar_level: scene.polar_level(),
        options: state.options.clone(),
    }
}
