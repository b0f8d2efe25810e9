use crate::FdError;

/// Floating point type used throughout the decision layer
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, FdError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FdError::NonFinite { what, value: v })
    }
}

/// Membership degrees live in the closed unit interval.
pub fn is_degree(v: Real) -> bool {
    v.is_finite() && (0.0..=1.0).contains(&v)
}
