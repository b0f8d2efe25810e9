//! Error types for fuzzy inference operations.

use thiserror::Error;

/// Result type for fuzzy inference operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while building or evaluating an inference engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// A rule references an antecedent variable with no supplied input value.
    #[error("Missing input for antecedent variable '{variable}'")]
    MissingInput { variable: String },

    /// An input value is NaN or infinite.
    #[error("Non-finite input for variable '{variable}': {value}")]
    NonFiniteInput { variable: String, value: f64 },

    /// A rule references a variable or label that was never declared.
    #[error("Unknown reference to '{variable}'/'{label}'")]
    UnknownReference { variable: String, label: String },

    /// A rule uses a variable in the wrong role.
    #[error("Variable '{variable}' is not declared as {expected}")]
    RoleMismatch {
        variable: String,
        expected: &'static str,
    },

    /// Universe bounds or step are malformed.
    #[error("Invalid universe: {what}")]
    InvalidUniverse { what: &'static str },

    /// Membership function breakpoints violate a <= b <= c or are non-finite.
    #[error("Invalid membership breakpoints ({a}, {b}, {c})")]
    InvalidBreakpoints { a: f64, b: f64, c: f64 },

    /// Two variables were declared with the same name.
    #[error("Duplicate variable '{variable}'")]
    DuplicateVariable { variable: String },

    /// A variable declares no membership terms.
    #[error("Variable '{variable}' has no membership terms")]
    EmptyVariable { variable: String },

    /// A rule declares no consequent pairs.
    #[error("Rule {rule} has no consequents")]
    EmptyRule { rule: usize },

    /// A rule weight is outside [0, 1] or non-finite.
    #[error("Rule {rule} has invalid weight {weight}")]
    InvalidRuleWeight { rule: usize, weight: f64 },
}
