//! Rules and antecedent expression trees.

use std::collections::BTreeMap;

use fd_core::Real;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Fuzzified inputs: variable name -> label -> degree of membership.
pub type Fuzzified = BTreeMap<String, BTreeMap<String, Real>>;

/// A rule condition over labeled memberships.
///
/// Evaluated by structural recursion with the Zadeh combinators: AND is min,
/// OR is max, NOT is complement. The existing controller rule bases use only
/// AND, but OR and NOT evaluate the same way everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Antecedent {
    /// Membership of one variable in one labeled term.
    Is { variable: String, label: String },
    And(Box<Antecedent>, Box<Antecedent>),
    Or(Box<Antecedent>, Box<Antecedent>),
    Not(Box<Antecedent>),
}

impl Antecedent {
    /// Leaf condition: `variable` is `label`.
    pub fn is(variable: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Is {
            variable: variable.into(),
            label: label.into(),
        }
    }

    pub fn and(self, other: Antecedent) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Antecedent) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Truth value of this condition against fuzzified inputs, in [0, 1].
    ///
    /// A leaf whose (variable, label) was never fuzzified is a configuration
    /// error, not a silent zero: the builder guarantees it cannot happen for
    /// engines it produced.
    pub fn strength(&self, fuzzified: &Fuzzified) -> EngineResult<Real> {
        match self {
            Self::Is { variable, label } => fuzzified
                .get(variable)
                .and_then(|degrees| degrees.get(label))
                .copied()
                .ok_or_else(|| EngineError::UnknownReference {
                    variable: variable.clone(),
                    label: label.clone(),
                }),
            Self::And(left, right) => Ok(left.strength(fuzzified)?.min(right.strength(fuzzified)?)),
            Self::Or(left, right) => Ok(left.strength(fuzzified)?.max(right.strength(fuzzified)?)),
            Self::Not(child) => Ok(1.0 - child.strength(fuzzified)?),
        }
    }

    /// Visit every (variable, label) leaf.
    pub(crate) fn for_each_leaf<'a>(&'a self, visit: &mut impl FnMut(&'a str, &'a str)) {
        match self {
            Self::Is { variable, label } => visit(variable, label),
            Self::And(left, right) | Self::Or(left, right) => {
                left.for_each_leaf(visit);
                right.for_each_leaf(visit);
            }
            Self::Not(child) => child.for_each_leaf(visit),
        }
    }
}

/// One (output variable, label) conclusion of a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consequent {
    pub variable: String,
    pub label: String,
}

impl Consequent {
    pub fn new(variable: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            label: label.into(),
        }
    }
}

/// An antecedent condition plus its weighted conclusions.
///
/// Immutable once the owning engine is built. The weight scales the firing
/// strength before implication and defaults to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    antecedent: Antecedent,
    consequents: Vec<Consequent>,
    weight: Real,
}

impl Rule {
    pub fn new(antecedent: Antecedent, consequents: Vec<Consequent>) -> Self {
        Self {
            antecedent,
            consequents,
            weight: 1.0,
        }
    }

    /// Set the firing-strength weight. Validated to [0, 1] at engine build.
    pub fn with_weight(mut self, weight: Real) -> Self {
        self.weight = weight;
        self
    }

    pub fn antecedent(&self) -> &Antecedent {
        &self.antecedent
    }

    pub fn consequents(&self) -> &[Consequent] {
        &self.consequents
    }

    pub fn weight(&self) -> Real {
        self.weight
    }
}
