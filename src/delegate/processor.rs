//! The capability set a state machine owner implements.

use super::outcome::Outcome;
use crate::core::State;
use std::sync::Arc;

/// Reactions to the phases of a transition.
///
/// The delegate calls these in a fixed order:
///
/// 1. [`on_exit`](Self::on_exit) when source and target differ
/// 2. [`action`](Self::action)
/// 3. [`on_action_failure`](Self::on_action_failure) if the action reported
///    an error, which ends the transition
/// 4. [`on_enter`](Self::on_enter) when source and target differ
///
/// Only `action` can fail a transition. The hooks return nothing; anything
/// that goes wrong inside them is the implementer's to handle.
///
/// Every method takes `&self`. A processor shared across threads keeps any
/// mutable bookkeeping behind its own synchronization.
///
/// # Example
///
/// ```rust
/// use stagehand::{DefaultDelegate, Delegate, EventProcessor, Outcome};
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct Door {
///     log: Mutex<Vec<String>>,
/// }
///
/// impl EventProcessor for Door {
///     type State = String;
///     type Args = ();
///     type Output = &'static str;
///     type Error = String;
///
///     fn on_exit(&self, from: &String, _args: &()) {
///         self.log.lock().unwrap().push(format!("exit {from}"));
///     }
///
///     fn action(&self, action: &str, _from: &String, _to: &String, _args: &()) -> Outcome<&'static str, String> {
///         self.log.lock().unwrap().push(action.to_string());
///         Outcome::success("done")
///     }
///
///     fn on_enter(&self, to: &String, _args: &()) {
///         self.log.lock().unwrap().push(format!("enter {to}"));
///     }
/// }
///
/// let door = Door::default();
/// let outcome = DefaultDelegate::new(&door).handle_event(
///     "open",
///     &"closed".to_string(),
///     &"open".to_string(),
///     &(),
/// );
///
/// assert_eq!(outcome.result(), Some(&"done"));
/// assert_eq!(*door.log.lock().unwrap(), ["exit closed", "open", "enter open"]);
/// ```
pub trait EventProcessor {
    /// State identifier type.
    type State: State;
    /// Payload passed unchanged to every phase.
    type Args: ?Sized;
    /// Value produced by a successful (or partially successful) action.
    type Output;
    /// Failure reported by the action.
    type Error;

    /// Leaving `from`. Runs before the action, never on self-transitions.
    fn on_exit(&self, _from: &Self::State, _args: &Self::Args) {}

    /// Perform the transition's domain effect.
    ///
    /// An outcome carrying an error fails the transition: the enter hook is
    /// skipped and the outcome goes back to the caller untouched.
    fn action(
        &self,
        action: &str,
        from: &Self::State,
        to: &Self::State,
        args: &Self::Args,
    ) -> Outcome<Self::Output, Self::Error>;

    /// Compensate for a failed action. Runs once, right after the failure.
    fn on_action_failure(
        &self,
        _action: &str,
        _from: &Self::State,
        _to: &Self::State,
        _args: &Self::Args,
        _err: &Self::Error,
    ) {
    }

    /// Arrived in `to`. Runs after a successful action, never on
    /// self-transitions.
    fn on_enter(&self, _to: &Self::State, _args: &Self::Args) {}
}

macro_rules! forward_processor {
    ($($ptr:ty),*) => {
        $(
            impl<P: EventProcessor + ?Sized> EventProcessor for $ptr {
                type State = P::State;
                type Args = P::Args;
                type Output = P::Output;
                type Error = P::Error;

                fn on_exit(&self, from: &Self::State, args: &Self::Args) {
                    (**self).on_exit(from, args)
                }

                fn action(
                    &self,
                    action: &str,
                    from: &Self::State,
                    to: &Self::State,
                    args: &Self::Args,
                ) -> Outcome<Self::Output, Self::Error> {
                    (**self).action(action, from, to, args)
                }

                fn on_action_failure(
                    &self,
                    action: &str,
                    from: &Self::State,
                    to: &Self::State,
                    args: &Self::Args,
                    err: &Self::Error,
                ) {
                    (**self).on_action_failure(action, from, to, args, err)
                }

                fn on_enter(&self, to: &Self::State, args: &Self::Args) {
                    (**self).on_enter(to, args)
                }
            }
        )*
    };
}

forward_processor!(&P, Box<P>, Arc<P>);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counting {
        actions: AtomicUsize,
    }

    impl EventProcessor for Counting {
        type State = String;
        type Args = [u8];
        type Output = usize;
        type Error = ();

        fn action(&self, _action: &str, _from: &String, _to: &String, args: &[u8]) -> Outcome<usize, ()> {
            self.actions.fetch_add(1, Ordering::SeqCst);
            Outcome::success(args.len())
        }
    }

    fn run_through<P>(processor: &P) -> Option<usize>
    where
        P: EventProcessor<State = String, Args = [u8], Output = usize> + ?Sized,
    {
        let state = "s".to_string();
        processor
            .action("count", &state, &state, &[1, 2, 3])
            .result()
            .copied()
    }

    #[test]
    fn default_hooks_do_nothing() {
        let processor = Counting::default();
        let state = "s".to_string();
        processor.on_exit(&state, &[]);
        processor.on_action_failure("a", &state, &state, &[], &());
        processor.on_enter(&state, &[]);
        assert_eq!(processor.actions.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unsized_args_are_supported() {
        assert_eq!(run_through(&Counting::default()), Some(3));
    }

    #[test]
    fn smart_pointers_forward() {
        let shared = Arc::new(Counting::default());
        assert_eq!(run_through(&shared), Some(3));
        assert_eq!(run_through(&Box::new(Counting::default())), Some(3));

        let borrowed: &Counting = &shared;
        assert_eq!(run_through(&borrowed), Some(3));
        assert_eq!(shared.actions.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn trait_objects_are_supported() {
        let processor: Box<dyn EventProcessor<State = String, Args = [u8], Output = usize, Error = ()>> =
            Box::new(Counting::default());
        assert_eq!(run_through(&*processor), Some(3));
    }
}
