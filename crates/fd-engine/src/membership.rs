//! Triangular membership functions.

use fd_core::Real;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A triangular membership function with breakpoints `a <= b <= c`.
///
/// Membership is 0 strictly outside `[a, c]`, 1 at the peak `b`, and linear
/// on each edge. Shoulder shapes (`a == b` or `b == c`) keep membership 1 at
/// the shared vertex, and the fully degenerate `a == b == c` is an indicator
/// function at `b` — the encoding used for categorical levels like signal
/// color or road surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Real,
    pub b: Real,
    pub c: Real,
}

impl Triangle {
    /// Create a membership function, validating breakpoint ordering.
    pub fn new(a: Real, b: Real, c: Real) -> EngineResult<Self> {
        if !a.is_finite() || !b.is_finite() || !c.is_finite() || a > b || b > c {
            return Err(EngineError::InvalidBreakpoints { a, b, c });
        }
        Ok(Self { a, b, c })
    }

    /// Degree of membership of `x`, in [0, 1].
    ///
    /// Total over all reals; values outside the owning variable's universe
    /// are not rejected and simply fall on the tails.
    pub fn degree(&self, x: Real) -> Real {
        if x < self.a || x > self.c {
            0.0
        } else if x == self.b {
            1.0
        } else if x < self.b {
            (x - self.a) / (self.b - self.a)
        } else {
            (self.c - x) / (self.c - self.b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_degrees() {
        let mf = Triangle::new(20.0, 50.0, 80.0).unwrap();
        assert_eq!(mf.degree(20.0), 0.0);
        assert_eq!(mf.degree(50.0), 1.0);
        assert_eq!(mf.degree(80.0), 0.0);
    }

    #[test]
    fn edge_interpolation() {
        let mf = Triangle::new(0.0, 40.0, 80.0).unwrap();
        assert_eq!(mf.degree(10.0), 0.25);
        assert_eq!(mf.degree(30.0), 0.75);
        assert_eq!(mf.degree(60.0), 0.5);
    }

    #[test]
    fn outside_support_is_zero() {
        let mf = Triangle::new(20.0, 50.0, 80.0).unwrap();
        assert_eq!(mf.degree(-10.0), 0.0);
        assert_eq!(mf.degree(19.9), 0.0);
        assert_eq!(mf.degree(80.1), 0.0);
        assert_eq!(mf.degree(1e9), 0.0);
    }

    #[test]
    fn left_shoulder() {
        // "close" style term: full membership at the low end.
        let mf = Triangle::new(0.0, 0.0, 40.0).unwrap();
        assert_eq!(mf.degree(0.0), 1.0);
        assert_eq!(mf.degree(10.0), 0.75);
        assert_eq!(mf.degree(40.0), 0.0);
    }

    #[test]
    fn right_shoulder() {
        // "fast" style term: full membership at the high end.
        let mf = Triangle::new(70.0, 120.0, 120.0).unwrap();
        assert_eq!(mf.degree(70.0), 0.0);
        assert_eq!(mf.degree(100.0), 0.6);
        assert_eq!(mf.degree(120.0), 1.0);
    }

    #[test]
    fn degenerate_indicator() {
        let mf = Triangle::new(1.0, 1.0, 1.0).unwrap();
        assert_eq!(mf.degree(1.0), 1.0);
        assert_eq!(mf.degree(0.999), 0.0);
        assert_eq!(mf.degree(1.001), 0.0);
        assert_eq!(mf.degree(0.0), 0.0);
    }

    #[test]
    fn rejects_unordered_breakpoints() {
        assert!(matches!(
            Triangle::new(1.0, 0.0, 2.0),
            Err(EngineError::InvalidBreakpoints { .. })
        ));
        assert!(matches!(
            Triangle::new(0.0, 2.0, 1.0),
            Err(EngineError::InvalidBreakpoints { .. })
        ));
        assert!(matches!(
            Triangle::new(f64::NAN, 0.0, 1.0),
            Err(EngineError::InvalidBreakpoints { .. })
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use fd_core::is_degree;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn degree_is_always_a_degree(
            mut pts in prop::array::uniform3(-1e6_f64..1e6_f64),
            x in -2e6_f64..2e6_f64,
        ) {
            pts.sort_by(|p, q| p.partial_cmp(q).unwrap());
            let mf = Triangle::new(pts[0], pts[1], pts[2]).unwrap();
            prop_assert!(is_degree(mf.degree(x)));
        }
    }
}
