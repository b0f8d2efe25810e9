//! Centroid defuzzification.

use fd_core::Real;

use crate::universe::Universe;

/// Centroid of area over the universe grid: `Σ(y_i·μ_i) / Σ(μ_i)`.
///
/// Returns `None` when the curve carries no mass (no rule fired for the
/// output); the engine substitutes the universe midpoint in that case rather
/// than dividing by zero.
pub fn centroid(universe: Universe, mu: &[Real]) -> Option<Real> {
    let mut moment = 0.0;
    let mut area = 0.0;
    for (y, m) in universe.samples().zip(mu) {
        moment += y * m;
        area += m;
    }
    if area == 0.0 { None } else { Some(moment / area) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fd_core::{Tolerances, nearly_equal};

    #[test]
    fn symmetric_curve_centers() {
        let u = Universe::new(0.0, 10.0, 1.0).unwrap();
        let mut mu = vec![0.0; 11];
        mu[4] = 1.0;
        mu[5] = 1.0;
        mu[6] = 1.0;
        assert_eq!(centroid(u, &mu), Some(5.0));
    }

    #[test]
    fn mass_at_one_point() {
        let u = Universe::new(0.0, 2.0, 1.0).unwrap();
        let mu = vec![0.0, 0.0, 0.4];
        assert_eq!(centroid(u, &mu), Some(2.0));
    }

    #[test]
    fn skewed_curve_leans_toward_mass() {
        let u = Universe::new(0.0, 10.0, 1.0).unwrap();
        let mu = vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
        let v = centroid(u, &mu).unwrap();
        // (6*0.2 + 7*0.4 + 8*0.6 + 9*0.8 + 10*1.0) / 3.0
        assert!(nearly_equal(v, 26.0 / 3.0, Tolerances::default()));
    }

    #[test]
    fn zero_mass_is_undefined() {
        let u = Universe::new(0.0, 10.0, 1.0).unwrap();
        assert_eq!(centroid(u, &[0.0; 11]), None);
    }
}
