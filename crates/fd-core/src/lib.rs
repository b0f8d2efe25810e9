//! fd-core: stable foundation for fuzzdrive.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FdError, FdResult};
pub use numeric::*;
