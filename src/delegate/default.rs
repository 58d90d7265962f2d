//! Orchestration of exit, action, failure and enter hooks.

use super::outcome::Outcome;
use super::processor::EventProcessor;
use super::trace::PhaseTrace;
use crate::core::{Phase, State, TransitionDescriptor};
use std::borrow::Borrow;
use tracing::{debug, trace, warn};

/// Entry point an FSM engine calls once it has resolved a transition.
pub trait Delegate {
    type State: State;
    type Args: ?Sized;
    type Output;
    type Error;

    /// Execute one already-validated transition and report its outcome.
    fn handle_event(
        &self,
        action: &str,
        from: &Self::State,
        to: &Self::State,
        args: &Self::Args,
    ) -> Outcome<Self::Output, Self::Error>;
}

/// Splits a transition into exit, action and enter steps on an
/// [`EventProcessor`].
///
/// Holds only a borrowed processor, so it is `Copy` and can be shared across
/// threads whenever the processor is `Sync`. Calls are independent: nothing
/// is cached between them.
pub struct DefaultDelegate<'p, P: ?Sized> {
    processor: &'p P,
}

impl<'p, P: ?Sized> Clone for DefaultDelegate<'p, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'p, P: ?Sized> Copy for DefaultDelegate<'p, P> {}

impl<'p, P: EventProcessor + ?Sized> DefaultDelegate<'p, P> {
    pub fn new(processor: &'p P) -> Self {
        Self { processor }
    }

    pub fn processor(&self) -> &'p P {
        self.processor
    }

    /// [`handle_event`](Delegate::handle_event) for a prepared descriptor.
    pub fn dispatch<A>(
        &self,
        descriptor: &TransitionDescriptor<P::State, A>,
    ) -> Outcome<P::Output, P::Error>
    where
        A: Borrow<P::Args>,
    {
        self.handle_event(
            &descriptor.action,
            &descriptor.from,
            &descriptor.to,
            descriptor.args.borrow(),
        )
    }

    /// Like `handle_event`, also returning the phases the call went through.
    pub fn handle_event_traced(
        &self,
        action: &str,
        from: &P::State,
        to: &P::State,
        args: &P::Args,
    ) -> (Outcome<P::Output, P::Error>, PhaseTrace) {
        let mut phases = PhaseTrace::new();
        let outcome = self.execute(action, from, to, args, |phase| phases.advance(phase));
        (outcome, phases)
    }

    fn execute<F>(
        &self,
        action: &str,
        from: &P::State,
        to: &P::State,
        args: &P::Args,
        mut observe: F,
    ) -> Outcome<P::Output, P::Error>
    where
        F: FnMut(Phase),
    {
        let crossing = from != to;

        if crossing {
            debug!(action, from = from.name(), to = to.name(), "exiting state");
            self.processor.on_exit(from, args);
            observe(Phase::Exited);
        } else {
            trace!(action, state = from.name(), "self-transition, exit and enter skipped");
        }

        let outcome = self.processor.action(action, from, to, args);
        observe(Phase::Acted);

        if let Some(err) = outcome.error() {
            observe(Phase::Failed);
            warn!(action, from = from.name(), to = to.name(), "transition action failed");
            self.processor.on_action_failure(action, from, to, args, err);
            observe(Phase::CompensatedEnd);
            return outcome;
        }
        observe(Phase::Succeeded);

        if crossing {
            debug!(action, from = from.name(), to = to.name(), "entering state");
            self.processor.on_enter(to, args);
            observe(Phase::Entered);
        }
        observe(Phase::End);

        outcome
    }
}

impl<'p, P: EventProcessor + ?Sized> Delegate for DefaultDelegate<'p, P> {
    type State = P::State;
    type Args = P::Args;
    type Output = P::Output;
    type Error = P::Error;

    fn handle_event(
        &self,
        action: &str,
        from: &P::State,
        to: &P::State,
        args: &P::Args,
    ) -> Outcome<P::Output, P::Error> {
        self.execute(action, from, to, args, |_| {})
    }
}
