//! Core state types.
//!
//! This module contains the pieces a caller implements or receives:
//! - Identity tags via the `StateId` trait
//! - The state capability contract via the `State` trait
//! - Change notifications handed to the manager's sink
//!
//! Nothing in here owns a machine; see [`crate::manager`] for that.

mod change;
mod id;
mod state;

pub use change::{Change, OnChange, TransitionRecord};
pub use id::StateId;
pub use state::{AnyState, State};
