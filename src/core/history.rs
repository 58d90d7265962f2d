//! Timestamped record of state changes.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single move from one state to another.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de>"))]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being reached
    pub to: S,
    /// When the move was observed
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Record a move observed now.
    pub fn now(from: S, to: S) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of state changes.
///
/// # Example
///
/// ```rust
/// use stagehand::core::{StateHistory, StateTransition};
///
/// let history = StateHistory::new()
///     .record(StateTransition::now("draft".to_string(), "pending".to_string()))
///     .record(StateTransition::now("pending".to_string(), "approved".to_string()));
///
/// let path: Vec<&str> = history.get_path().iter().map(|s| s.as_str()).collect();
/// assert_eq!(path, ["draft", "pending", "approved"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de>"))]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Return a new history with `transition` appended, leaving `self` as is.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append `transition` in place.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// States traversed: the first source, then every target in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Most recently reached state, if anything was recorded.
    pub fn current(&self) -> Option<&S> {
        self.transitions.last().map(|t| &t.to)
    }

    /// Time between the first and last recorded transitions.
    ///
    /// `None` when empty. Clock skew that would make the span negative also
    /// yields `None`.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<String> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.current().is_none());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_leaves_original_untouched() {
        let history = StateHistory::new();
        let next = history.record(StateTransition::now(s("a"), s("b")));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(next.transitions().len(), 1);
    }

    #[test]
    fn push_appends_in_place() {
        let mut history = StateHistory::new();
        history.push(StateTransition::now(s("a"), s("b")));
        history.push(StateTransition::now(s("b"), s("c")));

        assert_eq!(history.transitions().len(), 2);
        assert_eq!(history.current(), Some(&s("c")));
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(StateTransition::now(s("a"), s("b")))
            .record(StateTransition::now(s("b"), s("c")));

        assert_eq!(history.get_path(), vec![&s("a"), &s("b"), &s("c")]);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(StateTransition {
                from: s("a"),
                to: s("b"),
                timestamp: start,
            })
            .record(StateTransition {
                from: s("b"),
                to: s("c"),
                timestamp: start + chrono::Duration::milliseconds(25),
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(StateTransition::now(s("a"), s("b")));
        assert_eq!(history.duration(), Some(Duration::ZERO));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(StateTransition::now(s("a"), s("b")));

        let json = serde_json::to_string(&history).unwrap();
        let back: StateHistory<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.get_path(), history.get_path());
    }
}
