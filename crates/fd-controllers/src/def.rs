//! Declarative controller definition tables.
//!
//! A controller is static data: variables with their universes and
//! membership breakpoints, plus a rule list. [`ControllerDef::build`] turns
//! a table into a validated [`InferenceEngine`].

use fd_engine::{
    Antecedent, Consequent, EngineBuilder, EngineResult, InferenceEngine, Role, Rule, Triangle,
    Universe, Variable,
};

use crate::catalog::ControllerId;

/// One linguistic variable: `(min, max, step)` universe and labeled
/// triangular breakpoints.
#[derive(Debug, Clone, Copy)]
pub struct VariableDef {
    pub name: &'static str,
    pub role: Role,
    pub universe: (f64, f64, f64),
    pub terms: &'static [(&'static str, [f64; 3])],
}

/// A rule condition over (variable, label) references.
#[derive(Debug, Clone, Copy)]
pub enum ExprDef {
    Is(&'static str, &'static str),
    And(&'static ExprDef, &'static ExprDef),
    Or(&'static ExprDef, &'static ExprDef),
    Not(&'static ExprDef),
}

impl ExprDef {
    fn to_antecedent(self) -> Antecedent {
        match self {
            Self::Is(variable, label) => Antecedent::is(variable, label),
            Self::And(left, right) => left.to_antecedent().and(right.to_antecedent()),
            Self::Or(left, right) => left.to_antecedent().or(right.to_antecedent()),
            Self::Not(child) => child.to_antecedent().not(),
        }
    }
}

/// One rule: condition plus (output variable, label) conclusions.
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    pub when: ExprDef,
    pub then: &'static [(&'static str, &'static str)],
}

/// A complete controller configuration table.
#[derive(Debug, Clone, Copy)]
pub struct ControllerDef {
    pub id: ControllerId,
    pub name: &'static str,
    pub description: &'static str,
    pub variables: &'static [VariableDef],
    pub rules: &'static [RuleDef],
}

impl ControllerDef {
    /// Materialize the table into a validated engine.
    pub fn build(&self) -> EngineResult<InferenceEngine> {
        let mut builder = EngineBuilder::new();
        for def in self.variables {
            let (min, max, step) = def.universe;
            let mut variable = Variable::new(def.name, def.role, Universe::new(min, max, step)?);
            for (label, [a, b, c]) in def.terms {
                variable = variable.with_term(*label, Triangle::new(*a, *b, *c)?);
            }
            builder.add_variable(variable);
        }
        for def in self.rules {
            builder.add_rule(Rule::new(
                def.when.to_antecedent(),
                def.then
                    .iter()
                    .map(|(variable, label)| Consequent::new(*variable, *label))
                    .collect(),
            ));
        }
        builder.build()
    }

    /// Input variable names in declaration order, for display.
    pub fn input_names(&self) -> impl Iterator<Item = &'static str> {
        self.variables
            .iter()
            .filter(|def| def.role == Role::Antecedent)
            .map(|def| def.name)
    }

    /// Output variable names in declaration order, for display.
    pub fn output_names(&self) -> impl Iterator<Item = &'static str> {
        self.variables
            .iter()
            .filter(|def| def.role == Role::Consequent)
            .map(|def| def.name)
    }
}
