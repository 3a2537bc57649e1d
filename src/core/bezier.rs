//! Bézier-Grundbausteine: Binomialkoeffizient, Bernstein-Basis und Kurvenauswertung.

use glam::DVec2;

use super::GeometryError;

/// Binomialkoeffizient C(n, k) über die multiplikative Rekurrenz.
///
/// `result = result · (n − i + 1) / i` für i = 1..=k. Jeder Zwischenwert ist
/// selbst ein Binomialkoeffizient, die Ganzzahldivision geht daher immer auf.
/// Vorzeichenlose Parameter machen negative Argumente unrepräsentierbar;
/// `k > n` ist der verbleibende Fehlerfall.
pub fn binomial_coefficient(n: u32, k: u32) -> Result<u64, GeometryError> {
    if k > n {
        return Err(GeometryError::InvalidArgument(
            "Binomialkoeffizient verlangt k <= n",
        ));
    }
    // C(n, k) = C(n, n-k): kürzere Schleife nehmen
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 1..=u64::from(k) {
        result = result * (u64::from(n) - i + 1) / i;
    }
    Ok(result)
}

/// Bernstein-Basispolynom B(n, i, t) = C(n, i) · t^i · (1-t)^(n-i).
///
/// `t` wird bewusst nicht auf [0, 1] geklemmt; außerhalb des Intervalls
/// liefert die Formel die (ggf. negative) polynomiale Fortsetzung.
pub fn bernstein(n: u32, i: u32, t: f64) -> Result<f64, GeometryError> {
    let coeff = binomial_coefficient(n, i)? as f64;
    Ok(coeff * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32))
}

/// Bézier-Kurvenpunkt B(t) = Σ B(n, i, t) · Pᵢ über alle Kontrollpunkte.
///
/// Grad n = Punktanzahl − 1; ein einzelner Punkt ergibt die konstante Kurve.
/// Bei t = 0 und t = 1 sind alle Gewichte exakt 0 bzw. 1, der Rückgabewert
/// ist dann bitgenau der erste bzw. letzte Kontrollpunkt.
pub fn curve_point(points: &[DVec2], t: f64) -> Result<DVec2, GeometryError> {
    if points.is_empty() {
        return Err(GeometryError::InvalidArgument(
            "Kurvenauswertung verlangt mindestens einen Kontrollpunkt",
        ));
    }
    let n = (points.len() - 1) as u32;
    let mut acc = DVec2::ZERO;
    for (i, p) in points.iter().enumerate() {
        let weight = bernstein(n, i as u32, t)?;
        acc += weight * *p;
    }
    Ok(acc)
}
