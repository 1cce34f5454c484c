//! State manager: registry, current state and transition arbitration.

use crate::core::{AnyState, Change, OnChange, State, StateId};
use crate::manager::error::{RegistrationError, TransitError};
use chrono::Utc;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};
use uuid::Uuid;

/// Owns a set of states and moves between them.
///
/// The manager is created empty, populated once, then driven by repeated
/// [`transit`](Self::transit) calls. At most one state is current at any
/// time; before the first successful transition none is.
///
/// There is no internal locking. A manager is `Send`, so it can be handed to
/// another thread, but calls on one instance must be serialized by its owner.
pub struct StateManager<K: StateId> {
    id: Uuid,
    states: HashMap<K, Box<dyn AnyState<K>>>,
    current: Option<K>,
    on_change: Option<OnChange<K>>,
}

impl<K: StateId> StateManager<K> {
    /// Create an empty manager with no current state.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            states: HashMap::new(),
            current: None,
            on_change: None,
        }
    }

    /// Id of this manager, attached to its log events and change records.
    pub fn machine_id(&self) -> Uuid {
        self.id
    }

    /// Register a state.
    ///
    /// # Panics
    ///
    /// Registration errors are configuration bugs, so this panics when the
    /// state's identity is already registered, when its name is empty, or
    /// when the machine has already made its first transition. Use
    /// [`try_add`](Self::try_add) to get the error as a value instead.
    pub fn add<S: State<K>>(&mut self, state: S) {
        if let Err(err) = self.try_add(state) {
            warn!(machine = %self.id, error = %err, "Aborting state registration");
            panic!("{err}");
        }
    }

    /// Register a state, reporting failures instead of panicking.
    ///
    /// The registry is left untouched on failure.
    pub fn try_add<S: State<K>>(&mut self, state: S) -> Result<(), RegistrationError> {
        self.register(Box::new(state))
    }

    pub(crate) fn register(&mut self, state: Box<dyn AnyState<K>>) -> Result<(), RegistrationError> {
        let id = state.id();
        let name = id.name();

        if name.is_empty() {
            return Err(RegistrationError::EmptyName);
        }
        if self.current.is_some() {
            return Err(RegistrationError::MachineStarted {
                name: name.to_string(),
            });
        }
        if self.states.contains_key(&id) {
            return Err(RegistrationError::DuplicateState {
                name: name.to_string(),
            });
        }

        self.states.insert(id, state);
        debug!(machine = %self.id, state = name, "Registered state");
        Ok(())
    }

    /// Look up a registered state by identity.
    pub fn get(&self, id: K) -> Option<&dyn AnyState<K>> {
        self.states.get(&id).map(|state| &**state)
    }

    /// Look up a registered state by its text name.
    pub fn get_named(&self, name: &str) -> Option<&dyn AnyState<K>> {
        K::from_name(name).and_then(|id| self.get(id))
    }

    /// Borrow a registered state as its concrete type.
    pub fn get_as<S: State<K>>(&self) -> Option<&S> {
        self.states
            .get(&S::ID)
            .and_then(|state| state.downcast_ref::<S>())
    }

    /// Mutably borrow a registered state as its concrete type.
    ///
    /// This does not run any hooks; it is meant for inspecting or adjusting
    /// a state's own data between transitions.
    pub fn get_as_mut<S: State<K>>(&mut self) -> Option<&mut S> {
        self.states
            .get_mut(&S::ID)
            .and_then(|state| state.downcast_mut::<S>())
    }

    /// Whether a state with this identity is registered.
    pub fn contains(&self, id: K) -> bool {
        self.states.contains_key(&id)
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no state is registered.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Identities of all registered states, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = K> + '_ {
        self.states.keys().copied()
    }

    /// The current state, `None` before the first successful transition.
    pub fn curr_state(&self) -> Option<&dyn AnyState<K>> {
        self.current.and_then(|id| self.get(id))
    }

    /// Identity of the current state.
    pub fn curr_id(&self) -> Option<K> {
        self.current
    }

    /// Install the change-notification sink, replacing any previous one.
    ///
    /// The sink runs after every successful transition, once the new state
    /// is current and its `on_begin` hook has returned.
    pub fn set_on_change<F>(&mut self, sink: F)
    where
        F: FnMut(&Change<'_, K>) + Send + 'static,
    {
        self.on_change = Some(Box::new(sink));
    }

    /// Remove the change-notification sink.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// Whether the current state may be left for `id`.
    ///
    /// Always true when no state is current. Does not check that `id` is
    /// registered; [`transit`](Self::transit) does.
    pub fn can_curr_transit_to(&self, id: K) -> bool {
        match self.current {
            Some(from) => self.check_leave(from, id).is_ok(),
            None => true,
        }
    }

    /// Make the state registered under `id` current.
    ///
    /// On success the outgoing state's `on_end` runs to completion, the
    /// pointer moves, the incoming state's `on_begin` runs, and then the
    /// sink (if any) is notified. On failure nothing happens.
    ///
    /// # Errors
    ///
    /// - [`TransitError::StateNotFound`] if `id` is not registered
    /// - [`TransitError::SameStateTransitForbidden`] if `id` is current and
    ///   the current state disables same-state transit
    /// - [`TransitError::TransitionNotPermitted`] if the current state's
    ///   predicate rejects `id`
    pub fn transit(&mut self, id: K) -> Result<(), TransitError> {
        if !self.states.contains_key(&id) {
            let err = TransitError::StateNotFound {
                name: id.name().to_string(),
            };
            debug!(machine = %self.id, error = %err, "Transition rejected");
            return Err(err);
        }

        let previous = self.current;
        if let Some(from) = previous {
            if let Err(err) = self.check_leave(from, id) {
                debug!(machine = %self.id, error = %err, "Transition rejected");
                return Err(err);
            }
            if let Some(state) = self.states.get_mut(&from) {
                state.end();
            }
        }

        self.current = Some(id);
        if let Some(state) = self.states.get_mut(&id) {
            state.begin();
        }

        debug!(
            machine = %self.id,
            from = previous.map_or("none", |p| p.name()),
            to = id.name(),
            "State transition"
        );
        self.notify(previous, id);
        Ok(())
    }

    /// Transit to the state whose identity carries `name`.
    ///
    /// Text that names no identity fails with [`TransitError::StateNotFound`].
    pub fn transit_named(&mut self, name: &str) -> Result<(), TransitError> {
        let id = K::from_name(name).ok_or_else(|| TransitError::StateNotFound {
            name: name.to_string(),
        })?;
        self.transit(id)
    }

    fn check_leave(&self, from: K, to: K) -> Result<(), TransitError> {
        let Some(current) = self.get(from) else {
            return Ok(());
        };

        if from == to && !current.same_transit_enabled() {
            return Err(TransitError::SameStateTransitForbidden {
                name: from.name().to_string(),
            });
        }
        if !current.permits_transit_to(to) {
            return Err(TransitError::TransitionNotPermitted {
                from: from.name().to_string(),
                to: to.name().to_string(),
            });
        }
        Ok(())
    }

    fn notify(&mut self, from: Option<K>, to: K) {
        let Some(sink) = self.on_change.as_mut() else {
            return;
        };
        let Some(to) = self.states.get(&to) else {
            return;
        };

        let change = Change {
            machine: self.id,
            from: from.and_then(|id| self.states.get(&id)).map(|state| &**state),
            to: &**to,
            at: Utc::now(),
        };
        sink(&change);
    }
}

impl<K: StateId> Default for StateManager<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: StateId> fmt::Debug for StateManager<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateManager")
            .field("id", &self.id)
            .field("states", &self.states.keys().collect::<Vec<_>>())
            .field("current", &self.current)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
