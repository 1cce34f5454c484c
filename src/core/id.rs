//! Identity tags for registered states.
//!
//! Every state carries an identity drawn from a caller-defined enum. The
//! enum is declared once (usually through [`state_id!`](crate::state_id))
//! and each concrete state type pins its own variant as a constant.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identity tags.
///
/// A tag is a plain value: copying it, comparing it and hashing it never
/// touch the state it names. The text form returned by [`name`](Self::name)
/// is what callers see in errors and logs.
///
/// # Required Traits
///
/// - `Copy` + `Eq` + `Hash`: tags key the manager's registry
/// - `Debug`: tags show up in diagnostics
/// - `Serialize` + `Deserialize`: tags appear in transition records
///
/// # Example
///
/// ```rust
/// use modus::core::StateId;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Connecting,
///     Online,
/// }
///
/// impl StateId for Phase {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Connecting => "Connecting",
///             Self::Online => "Online",
///         }
///     }
///
///     fn from_name(name: &str) -> Option<Self> {
///         match name {
///             "Connecting" => Some(Self::Connecting),
///             "Online" => Some(Self::Online),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Phase::Online.name(), "Online");
/// assert_eq!(Phase::from_name("Connecting"), Some(Phase::Connecting));
/// ```
pub trait StateId:
    Copy + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Text token for this tag.
    ///
    /// Must be non-empty and stable for the lifetime of the program.
    fn name(&self) -> &'static str;

    /// Resolve a text token back into a tag.
    ///
    /// Returns `None` when no tag carries that name.
    fn from_name(name: &str) -> Option<Self>;
}
