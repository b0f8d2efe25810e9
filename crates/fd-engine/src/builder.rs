//! Engine construction and configuration validation.

use std::collections::{BTreeMap, BTreeSet};

use crate::engine::InferenceEngine;
use crate::error::{EngineError, EngineResult};
use crate::rule::Rule;
use crate::variable::{Role, Variable};

/// Collects variables and rules, then cross-checks every reference on
/// [`build`](EngineBuilder::build). No partially-valid engine is ever
/// produced: a malformed configuration fails the build outright.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    variables: Vec<Variable>,
    rules: Vec<Rule>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_variable(&mut self, variable: Variable) -> &mut Self {
        self.variables.push(variable);
        self
    }

    pub fn add_rule(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Validate the collected configuration and produce an engine.
    ///
    /// Checks, in order: unique variable names, non-empty term maps, rule
    /// weights in [0, 1], non-empty consequent lists, and that every
    /// antecedent leaf and consequent pair references a declared variable of
    /// the right role with a declared label.
    pub fn build(self) -> EngineResult<InferenceEngine> {
        let mut variables: BTreeMap<String, Variable> = BTreeMap::new();
        for variable in self.variables {
            if !variable.has_terms() {
                return Err(EngineError::EmptyVariable {
                    variable: variable.name().to_string(),
                });
            }
            let name = variable.name().to_string();
            if variables.insert(name.clone(), variable).is_some() {
                return Err(EngineError::DuplicateVariable { variable: name });
            }
        }

        let mut required_inputs = BTreeSet::new();
        for (index, rule) in self.rules.iter().enumerate() {
            let weight = rule.weight();
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(EngineError::InvalidRuleWeight {
                    rule: index,
                    weight,
                });
            }
            if rule.consequents().is_empty() {
                return Err(EngineError::EmptyRule { rule: index });
            }

            let mut leaf_error = None;
            rule.antecedent().for_each_leaf(&mut |name, label| {
                if leaf_error.is_some() {
                    return;
                }
                leaf_error = check_reference(&variables, name, label, Role::Antecedent).err();
                if leaf_error.is_none() {
                    required_inputs.insert(name.to_string());
                }
            });
            if let Some(err) = leaf_error {
                return Err(err);
            }

            for consequent in rule.consequents() {
                check_reference(
                    &variables,
                    &consequent.variable,
                    &consequent.label,
                    Role::Consequent,
                )?;
            }
        }

        Ok(InferenceEngine::from_parts(
            variables,
            self.rules,
            required_inputs,
        ))
    }
}

fn check_reference(
    variables: &BTreeMap<String, Variable>,
    name: &str,
    label: &str,
    expected: Role,
) -> EngineResult<()> {
    let variable = variables
        .get(name)
        .ok_or_else(|| EngineError::UnknownReference {
            variable: name.to_string(),
            label: label.to_string(),
        })?;
    if variable.role() != expected {
        return Err(EngineError::RoleMismatch {
            variable: name.to_string(),
            expected: match expected {
                Role::Antecedent => "an antecedent",
                Role::Consequent => "a consequent",
            },
        });
    }
    if variable.term(label).is_none() {
        return Err(EngineError::UnknownReference {
            variable: name.to_string(),
            label: label.to_string(),
        });
    }
    Ok(())
}
