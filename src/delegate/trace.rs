//! Record of the phases one transition execution went through.

use crate::core::{Phase, State, StateHistory, StateTransition};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timestamped path through [`Phase`] for a single `handle_event` call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PhaseTrace {
    history: StateHistory<Phase>,
}

impl PhaseTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase the execution is currently in.
    pub fn current(&self) -> Phase {
        self.history.current().copied().unwrap_or(Phase::Start)
    }

    pub(crate) fn advance(&mut self, next: Phase) {
        let current = self.current();
        debug_assert!(
            current.can_advance_to(next),
            "illegal phase step {current} -> {next}"
        );
        self.history.push(StateTransition::now(current, next));
    }

    /// Every phase visited, starting with [`Phase::Start`].
    pub fn path(&self) -> Vec<Phase> {
        if self.history.is_empty() {
            return vec![Phase::Start];
        }
        self.history.get_path().into_iter().copied().collect()
    }

    /// The terminal phase, once the execution has finished.
    pub fn terminal(&self) -> Option<Phase> {
        Some(self.current()).filter(|phase| phase.is_final())
    }

    /// The action failed and the failure hook ran.
    pub fn is_compensated(&self) -> bool {
        self.terminal() == Some(Phase::CompensatedEnd)
    }

    pub fn visited(&self, phase: Phase) -> bool {
        self.path().contains(&phase)
    }

    /// Wall time between the first and last recorded phase changes.
    pub fn duration(&self) -> Option<Duration> {
        self.history.duration()
    }

    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }
}
