//! Closure-backed event processors.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::delegate::{EventProcessor, Outcome};

type StateHook<S, A> = Box<dyn Fn(&S, &A) + Send + Sync>;
type ActionFn<S, A, T, E> = Box<dyn Fn(&str, &S, &S, &A) -> Outcome<T, E> + Send + Sync>;
type FailureHook<S, A, E> = Box<dyn Fn(&str, &S, &S, &A, &E) + Send + Sync>;

/// An [`EventProcessor`] assembled from closures by [`ProcessorBuilder`].
///
/// Hooks that were not supplied do nothing.
pub struct FnProcessor<S: State, A: ?Sized, T, E> {
    on_exit: Option<StateHook<S, A>>,
    action: ActionFn<S, A, T, E>,
    on_action_failure: Option<FailureHook<S, A, E>>,
    on_enter: Option<StateHook<S, A>>,
}

impl<S: State, A: ?Sized, T, E> EventProcessor for FnProcessor<S, A, T, E> {
    type State = S;
    type Args = A;
    type Output = T;
    type Error = E;

    fn on_exit(&self, from: &S, args: &A) {
        if let Some(hook) = &self.on_exit {
            hook(from, args);
        }
    }

    fn action(&self, action: &str, from: &S, to: &S, args: &A) -> Outcome<T, E> {
        (self.action)(action, from, to, args)
    }

    fn on_action_failure(&self, action: &str, from: &S, to: &S, args: &A, err: &E) {
        if let Some(hook) = &self.on_action_failure {
            hook(action, from, to, args, err);
        }
    }

    fn on_enter(&self, to: &S, args: &A) {
        if let Some(hook) = &self.on_enter {
            hook(to, args);
        }
    }
}

/// Fluent construction of an [`FnProcessor`].
///
/// # Example
///
/// ```rust
/// use stagehand::builder::ProcessorBuilder;
/// use stagehand::{DefaultDelegate, Delegate};
///
/// let processor = ProcessorBuilder::<String, u32, u32, String>::new()
///     .action_result(|_action, _from, _to, amount| {
///         if *amount > 0 { Ok(*amount * 2) } else { Err("zero".to_string()) }
///     })
///     .build()
///     .unwrap();
///
/// let delegate = DefaultDelegate::new(&processor);
/// let outcome = delegate.handle_event("double", &"a".to_string(), &"b".to_string(), &21);
/// assert_eq!(outcome.result(), Some(&42));
/// ```
pub struct ProcessorBuilder<S: State, A: ?Sized, T, E> {
    on_exit: Option<StateHook<S, A>>,
    action: Option<ActionFn<S, A, T, E>>,
    on_action_failure: Option<FailureHook<S, A, E>>,
    on_enter: Option<StateHook<S, A>>,
}

impl<S: State, A: ?Sized, T, E> ProcessorBuilder<S, A, T, E> {
    pub fn new() -> Self {
        Self {
            on_exit: None,
            action: None,
            on_action_failure: None,
            on_enter: None,
        }
    }

    /// Hook run when leaving a state (optional).
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: Fn(&S, &A) + Send + Sync + 'static,
    {
        self.on_exit = Some(Box::new(hook));
        self
    }

    /// The transition action (required).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&str, &S, &S, &A) -> Outcome<T, E> + Send + Sync + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    /// The transition action, written against `Result`.
    pub fn action_result<F>(self, action: F) -> Self
    where
        F: Fn(&str, &S, &S, &A) -> Result<T, E> + Send + Sync + 'static,
    {
        self.action(move |name: &str, from: &S, to: &S, args: &A| {
            Outcome::from(action(name, from, to, args))
        })
    }

    /// Hook run after the action fails (optional).
    pub fn on_action_failure<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &S, &S, &A, &E) + Send + Sync + 'static,
    {
        self.on_action_failure = Some(Box::new(hook));
        self
    }

    /// Hook run when entering a state (optional).
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: Fn(&S, &A) + Send + Sync + 'static,
    {
        self.on_enter = Some(Box::new(hook));
        self
    }

    pub fn build(self) -> Result<FnProcessor<S, A, T, E>, BuildError> {
        let action = self.action.ok_or(BuildError::MissingAction)?;

        Ok(FnProcessor {
            on_exit: self.on_exit,
            action,
            on_action_failure: self.on_action_failure,
            on_enter: self.on_enter,
        })
    }
}

impl<S: State, A: ?Sized, T, E> Default for ProcessorBuilder<S, A, T, E> {
    fn default() -> Self {
        Self::new()
    }
}
