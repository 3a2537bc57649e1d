//! Farbpalette für Polaren-Stufen.
//!
//! Ordnet der 1-basierten Polaren-Stufe eine RGB-Farbe zu.

/// RGB-Farbwert
pub type Rgb = [u8; 3];

/// Gibt die Farbe für eine Polaren-Stufe zurück.
///
/// Die ersten drei Stufen haben feste Farben (Grün, Magenta, Orange),
/// ab Stufe 4 wird prozedural eingefärbt. Total für jede Stufe; die
/// Modulo-Rechnung läuft in u64, damit auch riesige Stufen nicht überlaufen.
pub fn polar_level_color(level: u32) -> Rgb {
    match level {
        1 => [0, 255, 0],
        2 => [255, 0, 255],
        3 => [255, 200, 0],
        n => {
            let n = u64::from(n);
            [
                (40 * n % 256) as u8,
                (70 * n % 256) as u8,
                (100 * n % 256) as u8,
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_colors_for_first_levels() {
        assert_eq!(polar_level_color(1), [0, 255, 0]);
        assert_eq!(polar_level_color(2), [255, 0, 255]);
        assert_eq!(polar_level_color(3), [255, 200, 0]);
    }

    #[test]
    fn test_procedural_colors_from_level_four() {
        assert_eq!(polar_level_color(4), [160, 24, 144]);
        assert_eq!(polar_level_color(7), [24, 234, 188]);
    }

    #[test]
    fn test_total_for_huge_levels() {
        // 40 · u32::MAX überläuft u32, die Rechnung läuft deshalb in u64
        let expected = [
            (40u64 * u64::from(u32::MAX) % 256) as u8,
            (70u64 * u64::from(u32::MAX) % 256) as u8,
            (100u64 * u64::from(u32::MAX) % 256) as u8,
        ];
        assert_eq!(polar_level_color(u32::MAX), expected);
    }

    #[test]
    fn test_deterministic() {
        for level in 1..=64 {
            assert_eq!(polar_level_color(level), polar_level_color(level));
        }
    }
}
