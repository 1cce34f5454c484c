//! The transition engine.
//!
//! A [`StateManager`] owns a registry of states keyed by identity, tracks
//! which one is current, and arbitrates every transition:
//!
//! - **Registration**: identities are unique; duplicates are configuration bugs
//! - **Arbitration**: the current state decides whether it may be left
//! - **Lifecycle**: `on_end` of the old state, then `on_begin` of the new one
//! - **Notification**: an optional sink hears about every successful transition

mod error;
mod machine;

pub use error::{RegistrationError, TransitError};
pub use machine::StateManager;
