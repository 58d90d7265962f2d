//! Resolved transition handed to the delegate.

use super::state::State;
use serde::{Deserialize, Serialize};

/// A transition the engine has already resolved and validated.
///
/// The delegate does not check whether `action` is legal between `from` and
/// `to`; that belongs to whatever table produced the descriptor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize, A: Serialize",
    deserialize = "S: Deserialize<'de>, A: Deserialize<'de>"
))]
pub struct TransitionDescriptor<S: State, A> {
    pub action: String,
    pub from: S,
    pub to: S,
    pub args: A,
}

impl<S: State, A> TransitionDescriptor<S, A> {
    pub fn new(action: impl Into<String>, from: S, to: S, args: A) -> Self {
        Self {
            action: action.into(),
            from,
            to,
            args,
        }
    }

    /// Source and target are the same identifier.
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_states_are_not_self_transition() {
        let t = TransitionDescriptor::new("submit", "draft".to_string(), "pending".to_string(), ());
        assert!(!t.is_self_transition());
    }

    #[test]
    fn equal_states_are_self_transition() {
        let t = TransitionDescriptor::new("retry", "pending".to_string(), "pending".to_string(), ());
        assert!(t.is_self_transition());
    }

    #[test]
    fn borrowed_states_serialize() {
        let t = TransitionDescriptor::new("retry", "pending", "pending", ());

        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["from"], "pending");
        assert!(t.is_self_transition());
    }

    #[test]
    fn descriptor_serializes_with_args() {
        let t = TransitionDescriptor::new(
            "submit",
            "draft".to_string(),
            "pending".to_string(),
            vec![1u32, 2, 3],
        );

        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["action"], "submit");
        assert_eq!(json["args"], serde_json::json!([1, 2, 3]));

        let back: TransitionDescriptor<String, Vec<u32>> = serde_json::from_value(json).unwrap();
        assert_eq!(back, t);
    }
}
