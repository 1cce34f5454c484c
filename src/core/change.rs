//! Change notifications.
//!
//! After every successful transition the manager hands its sink a [`Change`]
//! describing what happened. A change borrows the states involved; call
//! [`Change::record`] for an owned, serializable copy.

use super::id::StateId;
use super::state::AnyState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller-supplied change-notification sink.
pub type OnChange<K> = Box<dyn FnMut(&Change<'_, K>) + Send>;

/// A transition that has just completed.
///
/// By the time a sink sees this value the new state is current and its
/// `on_begin` hook has already run.
pub struct Change<'a, K: StateId> {
    pub(crate) machine: Uuid,
    pub(crate) from: Option<&'a dyn AnyState<K>>,
    pub(crate) to: &'a dyn AnyState<K>,
    pub(crate) at: DateTime<Utc>,
}

impl<'a, K: StateId> Change<'a, K> {
    /// State that was current before the transition, if any.
    pub fn from(&self) -> Option<&'a dyn AnyState<K>> {
        self.from
    }

    /// State that is current now.
    pub fn to(&self) -> &'a dyn AnyState<K> {
        self.to
    }

    /// Whether the transition re-entered the state that was already current.
    pub fn is_same_state(&self) -> bool {
        self.from.is_some_and(|from| from.id() == self.to.id())
    }

    /// When the transition completed.
    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }

    /// Id of the manager that performed the transition.
    pub fn machine_id(&self) -> Uuid {
        self.machine
    }

    /// Owned copy of this change.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modus::core::State;
    /// use modus::{state_id, StateManager};
    /// use std::sync::{Arc, Mutex};
    ///
    /// state_id! {
    ///     enum Light {
    ///         Off,
    ///         On,
    ///     }
    /// }
    ///
    /// struct Off;
    /// impl State<Light> for Off {
    ///     const ID: Light = Light::Off;
    /// }
    ///
    /// let records = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&records);
    ///
    /// let mut manager = StateManager::new();
    /// manager.add(Off);
    /// manager.set_on_change(move |change| sink.lock().unwrap().push(change.record()));
    /// manager.transit(Light::Off).unwrap();
    ///
    /// let records = records.lock().unwrap();
    /// assert_eq!(records.len(), 1);
    /// assert_eq!(records[0].from, None);
    /// assert_eq!(records[0].to, Light::Off);
    /// ```
    pub fn record(&self) -> TransitionRecord<K> {
        TransitionRecord {
            machine: self.machine,
            from: self.from.map(|state| state.id()),
            to: self.to.id(),
            at: self.at,
        }
    }
}

/// Owned record of a completed transition.
///
/// Records are plain values a sink can queue, log or ship elsewhere. The
/// manager does not keep them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<K: StateId> {
    /// Manager that performed the transition
    pub machine: Uuid,
    /// State that was current before, `None` for the first transition
    pub from: Option<K>,
    /// State that became current
    pub to: K,
    /// When the transition completed
    pub at: DateTime<Utc>,
}
