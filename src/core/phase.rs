//! Phases a single `handle_event` call moves through.

use crate::define_states;

define_states! {
    /// Position inside one transition execution.
    ///
    /// ```text
    /// Start -> [Exited] -> Acted -> Failed -> CompensatedEnd
    ///                            \-> Succeeded -> [Entered] -> End
    /// ```
    ///
    /// `Exited` and `Entered` are skipped for self-transitions.
    pub enum Phase {
        /// Nothing has run yet.
        Start,
        /// The exit hook ran for the source state.
        Exited,
        /// The action returned.
        Acted,
        /// The action reported an error.
        Failed,
        /// The failure hook ran; the error is on its way to the caller.
        CompensatedEnd,
        /// The action reported no error.
        Succeeded,
        /// The enter hook ran for the target state.
        Entered,
        /// The transition completed.
        End,
    }
    terminal: [CompensatedEnd, End]
    error: [Failed, CompensatedEnd]
}

impl Phase {
    /// Whether `next` may directly follow `self`.
    pub fn can_advance_to(self, next: Phase) -> bool {
        use Phase::*;
        matches!(
            (self, next),
            (Start, Exited)
                | (Start, Acted)
                | (Exited, Acted)
                | (Acted, Failed)
                | (Acted, Succeeded)
                | (Failed, CompensatedEnd)
                | (Succeeded, Entered)
                | (Succeeded, End)
                | (Entered, End)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn terminal_phases() {
        let terminal: Vec<Phase> = Phase::VARIANTS
            .iter()
            .copied()
            .filter(|p| p.is_final())
            .collect();
        assert_eq!(terminal, vec![Phase::CompensatedEnd, Phase::End]);
    }

    #[test]
    fn failure_phases_are_errors() {
        assert!(Phase::Failed.is_error());
        assert!(Phase::CompensatedEnd.is_error());
        assert!(!Phase::End.is_error());
    }

    #[test]
    fn exit_and_enter_are_optional() {
        assert!(Phase::Start.can_advance_to(Phase::Acted));
        assert!(Phase::Succeeded.can_advance_to(Phase::End));
    }

    #[test]
    fn failure_never_reaches_enter() {
        assert!(!Phase::Failed.can_advance_to(Phase::Entered));
        assert!(!Phase::Acted.can_advance_to(Phase::Entered));
        assert!(!Phase::CompensatedEnd.can_advance_to(Phase::End));
    }

    #[test]
    fn terminal_phases_have_no_successor() {
        for terminal in [Phase::CompensatedEnd, Phase::End] {
            assert!(Phase::VARIANTS
                .iter()
                .all(|next| !terminal.can_advance_to(*next)));
        }
    }
}
