//! The inference engine: fuzzify, fire, aggregate, defuzzify.

use std::collections::{BTreeMap, BTreeSet};

use fd_core::Real;
use serde::{Deserialize, Serialize};

use crate::defuzz::centroid;
use crate::error::{EngineError, EngineResult};
use crate::rule::{Fuzzified, Rule};
use crate::universe::Universe;
use crate::variable::{Role, Variable};

/// Crisp input readings: antecedent variable name -> value.
pub type InputMap = BTreeMap<String, Real>;

/// Crisp output commands: consequent variable name -> defuzzified value.
pub type OutputMap = BTreeMap<String, Real>;

/// Aggregated output membership over one consequent's universe grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputCurve {
    pub universe: Universe,
    pub samples: Vec<Real>,
}

/// One controller's complete fuzzy configuration, ready to evaluate.
///
/// Built once through [`crate::EngineBuilder`], then read-only: `evaluate`
/// keeps all working state call-local, so a shared engine is safe to query
/// from multiple threads without locking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceEngine {
    variables: BTreeMap<String, Variable>,
    rules: Vec<Rule>,
    required_inputs: BTreeSet<String>,
}

impl InferenceEngine {
    pub(crate) fn from_parts(
        variables: BTreeMap<String, Variable>,
        rules: Vec<Rule>,
        required_inputs: BTreeSet<String>,
    ) -> Self {
        Self {
            variables,
            rules,
            required_inputs,
        }
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Antecedent variables referenced by at least one rule; `evaluate`
    /// requires an input entry for each.
    pub fn required_inputs(&self) -> impl Iterator<Item = &str> {
        self.required_inputs.iter().map(|name| name.as_str())
    }

    /// Run the full pipeline: every declared consequent variable appears in
    /// the output, via the midpoint fallback when none of its rules fired.
    pub fn evaluate(&self, inputs: &InputMap) -> EngineResult<OutputMap> {
        let curves = self.aggregate(inputs)?;
        let mut outputs = OutputMap::new();
        for (name, curve) in curves {
            let value = match centroid(curve.universe, &curve.samples) {
                Some(v) => v,
                None => {
                    tracing::debug!(
                        variable = %name,
                        "no rule fired for output, falling back to universe midpoint"
                    );
                    curve.universe.midpoint()
                }
            };
            outputs.insert(name, value);
        }
        Ok(outputs)
    }

    /// Fire every rule and aggregate the clipped consequent curves per output
    /// variable by point-wise max. Exposed so the aggregated shapes can be
    /// inspected and tested independently of defuzzification.
    pub fn aggregate(&self, inputs: &InputMap) -> EngineResult<BTreeMap<String, OutputCurve>> {
        let fuzzified = self.fuzzify_inputs(inputs)?;

        let mut curves: BTreeMap<String, OutputCurve> = self
            .variables
            .values()
            .filter(|var| var.role() == Role::Consequent)
            .map(|var| {
                let universe = var.universe();
                let samples = vec![0.0; universe.sample_count()];
                (var.name().to_string(), OutputCurve { universe, samples })
            })
            .collect();

        for rule in &self.rules {
            let firing = rule.antecedent().strength(&fuzzified)? * rule.weight();
            if firing <= 0.0 {
                continue;
            }
            for consequent in rule.consequents() {
                let mf = self
                    .variables
                    .get(&consequent.variable)
                    .and_then(|var| var.term(&consequent.label))
                    .copied()
                    .ok_or_else(|| EngineError::UnknownReference {
                        variable: consequent.variable.clone(),
                        label: consequent.label.clone(),
                    })?;
                let curve = curves.get_mut(&consequent.variable).ok_or_else(|| {
                    EngineError::RoleMismatch {
                        variable: consequent.variable.clone(),
                        expected: "a consequent",
                    }
                })?;
                // Mamdani min-implication, max aggregation.
                for (i, y) in curve.universe.samples().enumerate() {
                    let clipped = firing.min(mf.degree(y));
                    if clipped > curve.samples[i] {
                        curve.samples[i] = clipped;
                    }
                }
            }
        }
        Ok(curves)
    }

    /// Check required inputs are present and finite, then fuzzify every
    /// antecedent variable with a supplied value.
    fn fuzzify_inputs(&self, inputs: &InputMap) -> EngineResult<Fuzzified> {
        for name in &self.required_inputs {
            match inputs.get(name) {
                None => {
                    return Err(EngineError::MissingInput {
                        variable: name.clone(),
                    });
                }
                Some(value) if !value.is_finite() => {
                    return Err(EngineError::NonFiniteInput {
                        variable: name.clone(),
                        value: *value,
                    });
                }
                Some(_) => {}
            }
        }

        let mut fuzzified = Fuzzified::new();
        for var in self.variables.values() {
            if var.role() != Role::Antecedent {
                continue;
            }
            if let Some(value) = inputs.get(var.name()) {
                fuzzified.insert(var.name().to_string(), var.fuzzify(*value));
            }
        }
        Ok(fuzzified)
    }
}
