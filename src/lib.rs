//! Condition Mirror Library
//!
//! Derives *mirror conditions*: a copy of one object's status condition,
//! projected onto another object, with a configurable fallback when the
//! source condition has not been reported yet.
//!
//! Tests are included in the module files and under `tests/`.

pub mod conditions;
pub mod config;
pub mod constants;

// Re-export the condition API for convenience
pub use conditions::*;
