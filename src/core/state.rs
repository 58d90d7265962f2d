//! State identifiers.
//!
//! The delegate never inspects a state beyond comparing two identifiers and
//! asking for a display name, so the trait stays small.

use std::fmt::Debug;

/// Identifier of a position in a state machine.
///
/// Two identifiers that compare equal through `PartialEq` denote the same
/// state. A transition whose source and target are equal is a
/// self-transition and skips the exit and enter hooks.
///
/// # Required Traits
///
/// - `Clone`: identifiers are copied into descriptors and traces
/// - `PartialEq`: identity comparison between source and target
/// - `Debug`: diagnostics
///
/// Serialization is not required. Types that persist states, such as
/// [`TransitionDescriptor`](super::TransitionDescriptor) and
/// [`StateHistory`](super::StateHistory), ask for `Serialize`/`Deserialize`
/// only where they are serialized.
///
/// # Example
///
/// ```rust
/// use stagehand::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Ticket {
///     Open,
///     InProgress,
///     Closed,
/// }
///
/// impl State for Ticket {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::InProgress => "InProgress",
///             Self::Closed => "Closed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Closed)
///     }
/// }
///
/// assert_eq!(Ticket::InProgress.name(), "InProgress");
/// assert!(Ticket::Closed.is_final());
/// ```
pub trait State: Clone + PartialEq + Debug + Send + Sync {
    /// Name used in log fields and traces.
    fn name(&self) -> &str;

    /// Whether no further transitions are expected from this state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether this state represents a failure condition.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Plain string identifiers, for engines that name states at runtime.
impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

/// Borrowed identifiers, for tables written as string literals.
impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Light {
        Red,
        Green,
        Broken,
    }

    impl State for Light {
        fn name(&self) -> &str {
            match self {
                Self::Red => "Red",
                Self::Green => "Green",
                Self::Broken => "Broken",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Broken)
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Broken)
        }
    }

    #[test]
    fn enum_states_report_flags() {
        assert_eq!(Light::Green.name(), "Green");
        assert!(!Light::Red.is_final());
        assert!(Light::Broken.is_final());
        assert!(Light::Broken.is_error());
        assert!(!Light::Green.is_error());
    }

    #[test]
    fn string_states_use_their_contents_as_name() {
        let state = String::from("pending");
        assert_eq!(state.name(), "pending");
        assert!(!state.is_final());
        assert!(!state.is_error());
    }

    #[test]
    fn static_str_states_need_no_allocation() {
        let from: &'static str = "draft";
        assert_eq!(from.name(), "draft");
        assert!(!from.is_final());
        assert_ne!(from, "pending");
    }

    #[test]
    fn string_identity_is_value_equality() {
        let a = String::from("draft");
        let b = "draft".to_string();
        assert_eq!(a, b);
        assert_ne!(a, String::from("pending"));
    }

    #[test]
    fn state_serializes_correctly() {
        let json = serde_json::to_string(&Light::Red).unwrap();
        let back: Light = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Light::Red);
    }
}
