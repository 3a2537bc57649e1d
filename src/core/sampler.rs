//! Gleichmäßige Abtastung einer Bézier-Kurve als endliche Segmentfolge.

use glam::DVec2;

use super::bezier::curve_point;

/// Parameter-Schrittweite der Kurvenabtastung (100 Segmente über [0, 1]).
pub const SAMPLE_STEP: f64 = 0.01;

/// Ein abgetastetes Kurvensegment zwischen zwei Parameterwerten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
}

/// Endliche, lazy ausgewertete Segmentfolge über t ∈ [0, 1].
///
/// Abgetastet wird an n + 1 gleichverteilten Parameterwerten tᵢ = i / n mit
/// n = round(1 / step): t = 0 und t = 1 sind damit exakt enthalten, eine
/// akkumulierende Schrittweite könnte t = 1 verfehlen. Jeder Aufruf von
/// [`segments`] beginnt die Folge von vorn.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    points: &'a [DVec2],
    step_count: usize,
    next_index: usize,
    prev: DVec2,
}

/// Startet die Segmentfolge für die Kurve über `points`.
///
/// Ohne Kontrollpunkte ist die Folge leer; ein einzelner Punkt ergibt
/// degenerierte Segmente der konstanten Kurve.
pub fn segments(points: &[DVec2], step: f64) -> Segments<'_> {
    let step_count = if points.is_empty() {
        0
    } else {
        (1.0 / step).round().max(1.0) as usize
    };
    Segments {
        points,
        step_count,
        next_index: 1,
        // Kurvenpunkt bei t = 0 ist exakt der erste Kontrollpunkt
        prev: points.first().copied().unwrap_or(DVec2::ZERO),
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.next_index > self.step_count {
            return None;
        }
        let t = self.next_index as f64 / self.step_count as f64;
        let to = curve_point(self.points, t).ok()?;
        let segment = Segment { from: self.prev, to };
        self.prev = to;
        self.next_index += 1;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.step_count.saturating_sub(self.next_index - 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Segments<'_> {}

/// Tastet die Kurve als Polylinie ab (Segmentanfang plus alle Endpunkte).
pub fn sample_polyline(points: &[DVec2], step: f64) -> Vec<DVec2> {
    let iter = segments(points, step);
    let mut polyline = Vec::with_capacity(iter.len() + 1);
    for (i, segment) in iter.enumerate() {
        if i == 0 {
            polyline.push(segment.from);
        }
        polyline.push(segment.to);
    }
    polyline
}
