//! Linguistic variables and fuzzification.

use std::collections::BTreeMap;

use fd_core::Real;
use serde::{Deserialize, Serialize};

use crate::membership::Triangle;
use crate::universe::Universe;

/// Whether a variable is read from inputs or written as an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Input-side: appears in rule conditions.
    Antecedent,
    /// Output-side: produced by rule conclusions.
    Consequent,
}

/// A named linguistic variable: a universe plus labeled membership terms.
///
/// Terms are stored in a `BTreeMap` so iteration order is a property of the
/// labels, never of insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    name: String,
    role: Role,
    universe: Universe,
    terms: BTreeMap<String, Triangle>,
}

impl Variable {
    /// Create a variable with no terms yet.
    pub fn new(name: impl Into<String>, role: Role, universe: Universe) -> Self {
        Self {
            name: name.into(),
            role,
            universe,
            terms: BTreeMap::new(),
        }
    }

    /// Add a labeled membership term. Re-adding a label replaces it.
    pub fn with_term(mut self, label: impl Into<String>, mf: Triangle) -> Self {
        self.terms.insert(label.into(), mf);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn universe(&self) -> Universe {
        self.universe
    }

    pub fn term(&self, label: &str) -> Option<&Triangle> {
        self.terms.get(label)
    }

    pub fn terms(&self) -> impl Iterator<Item = (&str, &Triangle)> {
        self.terms.iter().map(|(label, mf)| (label.as_str(), mf))
    }

    pub fn has_terms(&self) -> bool {
        !self.terms.is_empty()
    }

    /// Apply every term's membership function to `value`.
    ///
    /// Returns the full label map, zero degrees included; callers filter if
    /// they only care about active terms. `value` is not clamped to the
    /// universe — out-of-range readings land on the membership tails.
    pub fn fuzzify(&self, value: Real) -> BTreeMap<String, Real> {
        self.terms
            .iter()
            .map(|(label, mf)| (label.clone(), mf.degree(value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance() -> Variable {
        Variable::new("distance", Role::Antecedent, Universe::new(0.0, 100.0, 1.0).unwrap())
            .with_term("close", Triangle::new(0.0, 0.0, 40.0).unwrap())
            .with_term("medium", Triangle::new(20.0, 50.0, 80.0).unwrap())
            .with_term("far", Triangle::new(60.0, 100.0, 100.0).unwrap())
    }

    #[test]
    fn fuzzify_returns_every_label() {
        let degrees = distance().fuzzify(10.0);
        assert_eq!(degrees.len(), 3);
        assert_eq!(degrees["close"], 0.75);
        assert_eq!(degrees["medium"], 0.0);
        assert_eq!(degrees["far"], 0.0);
    }

    #[test]
    fn fuzzify_overlapping_terms() {
        let degrees = distance().fuzzify(30.0);
        assert_eq!(degrees["close"], 0.25);
        assert!((degrees["medium"] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(degrees["far"], 0.0);
    }

    #[test]
    fn fuzzify_out_of_universe() {
        // Beyond the declared sensor range: tails apply, nothing is clamped.
        let degrees = distance().fuzzify(150.0);
        assert!(degrees.values().all(|d| *d == 0.0));
    }

    #[test]
    fn with_term_replaces_label() {
        let var = distance().with_term("close", Triangle::new(0.0, 0.0, 20.0).unwrap());
        assert_eq!(var.term("close").unwrap().c, 20.0);
        assert_eq!(var.terms().count(), 3);
    }

    mod proptests {
        use super::*;
        use fd_core::is_degree;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn fuzzified_degrees_stay_in_unit_interval(value in -1e4_f64..1e4_f64) {
                for (_, d) in distance().fuzzify(value) {
                    prop_assert!(is_degree(d));
                }
            }
        }
    }
}
