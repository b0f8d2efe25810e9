//! The fuzzdrive controller catalog.
//!
//! Eight advisory controllers, each a pure data table (universe bounds,
//! membership breakpoints, rule list) bound to one shared inference engine.
//! Adding a ninth controller is a data-authoring exercise: write a new
//! [`ControllerDef`] table and register it in the catalog — no new code.

pub mod catalog;
pub mod def;

mod cruise;
mod obstacle;
mod parking;
mod pedestrian;
mod road;
mod signal;
mod speed;
mod steering;

pub use catalog::{ControllerId, catalog, controller};
pub use def::{ControllerDef, ExprDef, RuleDef, VariableDef};
