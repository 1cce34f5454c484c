//! Modus: a minimal finite state machine runtime
//!
//! Modus keeps a registry of named states and moves between them one at a
//! time. Each state decides for itself whether it may be left for a given
//! target and whether it may be re-entered from itself; the manager enforces
//! those rules and runs the lifecycle hooks in a fixed order.
//!
//! # Core Concepts
//!
//! - **Identity**: an enum tag per state, declared with `state_id!`
//! - **State**: lifecycle hooks and transition rules via the `State` trait
//! - **StateManager**: registry, current state and transition arbitration
//!
//! # Example
//!
//! ```rust
//! use modus::{state_id, State, StateManager, TransitError};
//!
//! state_id! {
//!     enum Motion {
//!         Idle,
//!         Move,
//!         Jump,
//!     }
//! }
//!
//! struct Idle;
//!
//! impl State<Motion> for Idle {
//!     const ID: Motion = Motion::Idle;
//! }
//!
//! struct Move;
//!
//! impl State<Motion> for Move {
//!     const ID: Motion = Motion::Move;
//!
//!     fn enable_same_transit(&self) -> bool {
//!         true
//!     }
//! }
//!
//! struct Jump;
//!
//! impl State<Motion> for Jump {
//!     const ID: Motion = Motion::Jump;
//!
//!     fn can_transit_to(&self, target: Motion) -> bool {
//!         target != Motion::Move
//!     }
//! }
//!
//! let mut manager = StateManager::new();
//! manager.add(Idle);
//! manager.add(Move);
//! manager.add(Jump);
//!
//! manager.transit(Motion::Idle).unwrap();
//! manager.transit(Motion::Move).unwrap();
//! manager.transit(Motion::Move).unwrap();
//! manager.transit(Motion::Jump).unwrap();
//!
//! assert!(matches!(
//!     manager.transit(Motion::Move),
//!     Err(TransitError::TransitionNotPermitted { .. })
//! ));
//! assert_eq!(manager.curr_id(), Some(Motion::Jump));
//! ```

pub mod builder;
pub mod core;
pub mod manager;

// Re-export commonly used types
pub use builder::{BuildError, StateManagerBuilder};
pub use crate::core::{AnyState, Change, State, StateId, TransitionRecord};
pub use manager::{RegistrationError, StateManager, TransitError};
