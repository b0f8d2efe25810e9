//! Mamdani fuzzy inference engine for the fuzzdrive decision layer.
//!
//! One engine instance holds the linguistic variables and rule base of a
//! single advisory controller and maps crisp sensor readings to crisp
//! actuator commands:
//!
//! 1. Fuzzification of every input against its variable's membership terms
//! 2. Rule firing-strength evaluation (Zadeh min/max over the antecedent tree)
//! 3. Min-implication of each rule's consequent terms, clipped at the
//!    firing strength
//! 4. Point-wise max aggregation per output variable over its sampled universe
//! 5. Centroid defuzzification, with a deterministic universe-midpoint
//!    fallback when no rule fires for an output
//!
//! # Design Principles
//!
//! - **Configuration is data**: controllers supply variables and rules; the
//!   numeric pipeline never changes per controller
//! - **Validate at build**: `EngineBuilder` rejects malformed configurations
//!   so evaluation works only against cross-checked references
//! - **Stateless evaluation**: `evaluate` takes `&self` and keeps all working
//!   state call-local, so a shared engine may be queried concurrently

pub mod builder;
pub mod defuzz;
pub mod engine;
pub mod error;
pub mod membership;
pub mod rule;
pub mod universe;
pub mod variable;

pub use builder::EngineBuilder;
pub use defuzz::centroid;
pub use engine::{InferenceEngine, InputMap, OutputCurve, OutputMap};
pub use error::{EngineError, EngineResult};
pub use membership::Triangle;
pub use rule::{Antecedent, Consequent, Rule};
pub use universe::Universe;
pub use variable::{Role, Variable};
