//! Macros for declaring state identities.

/// Declare an identity enum and implement [`StateId`](crate::core::StateId)
/// for it.
///
/// Each variant's name is its identifier, and `from_name` accepts exactly
/// those identifiers. The caller's crate must depend on `serde`.
///
/// # Example
///
/// ```
/// use modus::core::StateId;
/// use modus::state_id;
///
/// state_id! {
///     pub enum Connection {
///         Disconnected,
///         Connecting,
///         Connected,
///     }
/// }
///
/// assert_eq!(Connection::Connecting.name(), "Connecting");
/// assert_eq!(Connection::from_name("Connected"), Some(Connection::Connected));
/// assert_eq!(Connection::from_name("Lost"), None);
/// ```
#[macro_export]
macro_rules! state_id {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $crate::core::StateId for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($variant) => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::StateId;

    state_id! {
        enum Phase {
            Idle,
            Running,
            Done,
        }
    }

    #[test]
    fn state_id_macro_generates_names() {
        assert_eq!(Phase::Idle.name(), "Idle");
        assert_eq!(Phase::Running.name(), "Running");
        assert_eq!(Phase::Done.name(), "Done");
    }

    #[test]
    fn state_id_macro_generates_lookup() {
        assert_eq!(Phase::from_name("Running"), Some(Phase::Running));
        assert_eq!(Phase::from_name("running"), None);
        assert_eq!(Phase::from_name(""), None);
    }

    #[test]
    fn state_id_supports_visibility_and_attributes() {
        state_id! {
            /// Documented identity
            pub enum PublicPhase {
                A,
                #[allow(dead_code)]
                B,
            }
        }

        assert_eq!(PublicPhase::A.name(), "A");
    }

    #[test]
    fn generated_ids_are_copy_and_hashable() {
        use std::collections::HashSet;

        let id = Phase::Done;
        let copied = id;
        let set: HashSet<Phase> = [id, copied, Phase::Idle].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
