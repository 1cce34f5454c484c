//! Errors raised by the state manager.

use thiserror::Error;

/// Errors that can occur when requesting a transition.
///
/// A failed transition leaves the manager exactly as it was: no hook runs,
/// no notification is sent and the current state does not move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitError {
    #[error("State '{name}' not found")]
    StateNotFound { name: String },

    #[error("State '{name}' forbids same-state transit")]
    SameStateTransitForbidden { name: String },

    #[error("Transition from '{from}' to '{to}' not permitted")]
    TransitionNotPermitted { from: String, to: String },
}

/// Errors that can occur when registering a state.
///
/// These are configuration bugs. [`StateManager::add`] panics on them;
/// [`StateManager::try_add`] and the builder report them as values.
///
/// [`StateManager::add`]: crate::manager::StateManager::add
/// [`StateManager::try_add`]: crate::manager::StateManager::try_add
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Duplicate state: {name}")]
    DuplicateState { name: String },

    #[error("State identity has an empty name")]
    EmptyName,

    #[error("Cannot register state '{name}' after the machine has started")]
    MachineStarted { name: String },
}
