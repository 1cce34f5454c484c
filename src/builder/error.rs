//! Build errors for the state manager builder.

use crate::manager::{RegistrationError, TransitError};
use thiserror::Error;

/// Errors that can occur when building a state manager.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No states registered. Add at least one state with .state(state)")]
    NoStates,

    /// Every registration that failed, not just the first.
    #[error("Invalid state registrations: {0:?}")]
    InvalidStates(Vec<RegistrationError>),

    #[error("Initial transition failed: {0}")]
    InitialTransit(#[from] TransitError),
}
