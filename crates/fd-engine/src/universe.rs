//! Sampled numeric domains for linguistic variables.

use fd_core::Real;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Relative slack when checking that the span is a whole number of steps.
const SPAN_TOL: Real = 1e-9;

/// A bounded, regularly sampled numeric domain.
///
/// The grid is inclusive at both ends: a universe (0, 100, 1) has 101 sample
/// points. Aggregation and defuzzification operate on this grid, so the
/// sample count must be deterministic; `new` rejects a (min, max, step)
/// triple whose span is not a whole number of steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    min: Real,
    max: Real,
    step: Real,
}

impl Universe {
    /// Create a universe, validating bounds and step.
    pub fn new(min: Real, max: Real, step: Real) -> EngineResult<Self> {
        if !min.is_finite() || !max.is_finite() || !step.is_finite() {
            return Err(EngineError::InvalidUniverse {
                what: "bounds and step must be finite",
            });
        }
        if min >= max {
            return Err(EngineError::InvalidUniverse {
                what: "min must be less than max",
            });
        }
        if step <= 0.0 {
            return Err(EngineError::InvalidUniverse {
                what: "step must be positive",
            });
        }
        let span = (max - min) / step;
        if (span - span.round()).abs() > SPAN_TOL * span.round().max(1.0) {
            return Err(EngineError::InvalidUniverse {
                what: "span must be a whole number of steps",
            });
        }
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> Real {
        self.min
    }

    pub fn max(&self) -> Real {
        self.max
    }

    pub fn step(&self) -> Real {
        self.step
    }

    /// Number of grid points, endpoints included.
    pub fn sample_count(&self) -> usize {
        ((self.max - self.min) / self.step).round() as usize + 1
    }

    /// The i-th grid point. Computed from the span fraction so the first and
    /// last samples are exactly `min` and `max`.
    pub fn sample(&self, i: usize) -> Real {
        let n = self.sample_count() - 1;
        self.min + (self.max - self.min) * (i as Real) / (n as Real)
    }

    /// Iterate the grid from `min` to `max` inclusive.
    pub fn samples(&self) -> impl Iterator<Item = Real> + '_ {
        (0..self.sample_count()).map(|i| self.sample(i))
    }

    /// Fallback output when no rule fires for a consequent on this universe.
    pub fn midpoint(&self) -> Real {
        0.5 * (self.min + self.max)
    }
}
