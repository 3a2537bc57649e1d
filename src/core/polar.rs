//! Polaren-Reduktion: benachbarte Kontrollpunkte bei festem t₁ verblenden.

use glam::DVec2;

/// Eine Reduktionsstufe: m Punkte → m−1 Blends.
///
/// Qᵢ = (1 − t₁)·Pᵢ + t₁·Pᵢ₊₁ für i = 0..m−1. Ein einzelner Punkt hat kein
/// Nachbarpaar und ergibt die leere Folge; die Eingabe bleibt unverändert.
/// `t₁` wird nicht geklemmt, bei t₁ = 0 bzw. t₁ = 1 ist das Ergebnis exakt
/// der jeweils linke bzw. rechte Nachbar.
pub fn polar_reduce(points: &[DVec2], t1: f64) -> Vec<DVec2> {
    points
        .windows(2)
        .map(|pair| (1.0 - t1) * pair[0] + t1 * pair[1])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_shrinks_by_one() {
        for m in 2..=6 {
            let points: Vec<DVec2> = (0..m).map(|i| DVec2::new(f64::from(i), 0.0)).collect();
            assert_eq!(polar_reduce(&points, 0.3).len(), (m - 1) as usize);
        }
    }

    #[test]
    fn test_single_point_yields_empty() {
        let points = [DVec2::new(4.0, 2.0)];
        assert!(polar_reduce(&points, 0.5).is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty() {
        assert!(polar_reduce(&[], 0.5).is_empty());
    }

    #[test]
    fn test_midpoint_blend_is_exact() {
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(100.0, 0.0),
            DVec2::new(100.0, 100.0),
        ];
        let reduced = polar_reduce(&points, 0.5);
        assert_eq!(reduced, vec![DVec2::new(50.0, 0.0), DVec2::new(100.0, 50.0)]);
    }

    #[test]
    fn test_blend_endpoints_select_neighbours() {
        let points = [DVec2::new(-3.0, 8.0), DVec2::new(5.0, -1.0)];
        assert_eq!(polar_reduce(&points, 0.0), vec![points[0]]);
        assert_eq!(polar_reduce(&points, 1.0), vec![points[1]]);
    }
}
