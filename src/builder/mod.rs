//! Builder API for ergonomic state manager construction.
//!
//! This module provides a fluent builder for the setup phase and the
//! `state_id!` macro for declaring identity enums with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateManagerBuilder;
