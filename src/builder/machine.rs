//! Builder for constructing state managers.

use crate::builder::error::BuildError;
use crate::core::{AnyState, Change, OnChange, State, StateId};
use crate::manager::{RegistrationError, StateManager};

/// Builder for constructing state managers with a fluent API.
///
/// Unlike [`StateManager::add`], which panics on the first bad registration,
/// [`build`](Self::build) checks every queued state and reports all the
/// failures together.
pub struct StateManagerBuilder<K: StateId> {
    states: Vec<Box<dyn AnyState<K>>>,
    initial: Option<K>,
    on_change: Option<OnChange<K>>,
}

impl<K: StateId> StateManagerBuilder<K> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            initial: None,
            on_change: None,
        }
    }

    /// Queue a state for registration.
    pub fn state<S: State<K>>(mut self, state: S) -> Self {
        self.states.push(Box::new(state));
        self
    }

    /// Set the change-notification sink (optional).
    pub fn on_change<F>(mut self, sink: F) -> Self
    where
        F: FnMut(&Change<'_, K>) + Send + 'static,
    {
        self.on_change = Some(Box::new(sink));
        self
    }

    /// Transit into this state as the last step of `build` (optional).
    ///
    /// The sink, if set, is installed first and hears this transition.
    pub fn initial(mut self, id: K) -> Self {
        self.initial = Some(id);
        self
    }

    /// Build the state manager.
    /// Returns an error if no state was queued or any registration fails.
    pub fn build(self) -> Result<StateManager<K>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut manager = StateManager::new();
        let errors: Vec<RegistrationError> = self
            .states
            .into_iter()
            .filter_map(|state| manager.register(state).err())
            .collect();
        if !errors.is_empty() {
            return Err(BuildError::InvalidStates(errors));
        }

        if let Some(sink) = self.on_change {
            manager.set_on_change(sink);
        }
        if let Some(initial) = self.initial {
            manager.transit(initial)?;
        }

        Ok(manager)
    }
}

impl<K: StateId> Default for StateManagerBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}
