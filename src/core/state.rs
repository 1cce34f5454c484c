//! State capability contract.
//!
//! A state is one mode of a machine. It knows its own identity, whether it
//! may be re-entered from itself, which targets it may be left for, and what
//! to do when it is entered or exited. Everything except the identity has a
//! default, so most states override only the hooks they care about.

use super::id::StateId;
use std::any::Any;
use std::fmt;

/// Trait for machine states.
///
/// The identity is an associated constant, so it is bound when the type is
/// defined and cannot be renamed afterwards. A state instance is moved into
/// the manager once and reused on every visit.
///
/// # Defaults
///
/// - same-state transit is disabled
/// - `on_begin` and `on_end` do nothing
/// - every target is permitted
///
/// # Example
///
/// ```rust
/// use modus::core::State;
/// use modus::state_id;
///
/// state_id! {
///     pub enum Door {
///         Open,
///         Closed,
///         Locked,
///     }
/// }
///
/// struct Closed {
///     slams: u32,
/// }
///
/// impl State<Door> for Closed {
///     const ID: Door = Door::Closed;
///
///     fn on_begin(&mut self) {
///         self.slams += 1;
///     }
/// }
///
/// struct Locked;
///
/// impl State<Door> for Locked {
///     const ID: Door = Door::Locked;
///
///     // A locked door has to be unlocked (closed) before it can open.
///     fn can_transit_to(&self, target: Door) -> bool {
///         target != Door::Open
///     }
/// }
///
/// assert!(!Locked.can_transit_to(Door::Open));
/// assert!(Locked.can_transit_to(Door::Closed));
/// ```
pub trait State<K: StateId>: Send + 'static {
    /// Identity tag of this state type.
    const ID: K;

    /// Whether a transition from this state to itself is allowed.
    ///
    /// When enabled, such a transition runs `on_end` then `on_begin` on the
    /// same instance.
    fn enable_same_transit(&self) -> bool {
        false
    }

    /// Called once per successful transition into this state, after it has
    /// become current.
    fn on_begin(&mut self) {}

    /// Called once per successful transition out of this state, before the
    /// next state becomes current.
    fn on_end(&mut self) {}

    /// Whether leaving this state for `target` is permitted.
    fn can_transit_to(&self, target: K) -> bool {
        let _ = target;
        true
    }
}

/// Object-safe view of a registered state.
///
/// Blanket-implemented for every [`State`]; the manager stores states as
/// `Box<dyn AnyState<K>>` and hands out `&dyn AnyState<K>` from lookups.
/// Use [`downcast_ref`](#method.downcast_ref) to get the concrete type back.
pub trait AnyState<K: StateId>: Send + 'static {
    /// Identity tag.
    fn id(&self) -> K;

    /// Text token of the identity tag.
    fn name(&self) -> &'static str {
        self.id().name()
    }

    /// See [`State::enable_same_transit`].
    fn same_transit_enabled(&self) -> bool;

    /// See [`State::can_transit_to`].
    fn permits_transit_to(&self, target: K) -> bool;

    /// Runs [`State::on_begin`].
    fn begin(&mut self);

    /// Runs [`State::on_end`].
    fn end(&mut self);

    /// Borrow as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Mutably borrow as `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<K: StateId, S: State<K>> AnyState<K> for S {
    fn id(&self) -> K {
        <S as State<K>>::ID
    }

    fn same_transit_enabled(&self) -> bool {
        <S as State<K>>::enable_same_transit(self)
    }

    fn permits_transit_to(&self, target: K) -> bool {
        <S as State<K>>::can_transit_to(self, target)
    }

    fn begin(&mut self) {
        <S as State<K>>::on_begin(self)
    }

    fn end(&mut self) {
        <S as State<K>>::on_end(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<K: StateId> dyn AnyState<K> {
    /// Whether this state is of concrete type `S`.
    pub fn is<S: State<K>>(&self) -> bool {
        self.as_any().is::<S>()
    }

    /// Borrow this state as its concrete type.
    pub fn downcast_ref<S: State<K>>(&self) -> Option<&S> {
        self.as_any().downcast_ref::<S>()
    }

    /// Mutably borrow this state as its concrete type.
    pub fn downcast_mut<S: State<K>>(&mut self) -> Option<&mut S> {
        self.as_any_mut().downcast_mut::<S>()
    }
}

impl<K: StateId> fmt::Debug for dyn AnyState<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyState")
            .field("id", &self.id())
            .finish_non_exhaustive()
    }
}
