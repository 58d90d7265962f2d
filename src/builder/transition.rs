//! Builder for transition descriptors.

use crate::builder::error::BuildError;
use crate::core::{State, TransitionDescriptor};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Fluent construction of a [`TransitionDescriptor`].
pub struct TransitionBuilder<S: State, A> {
    action: Option<String>,
    from: Option<S>,
    to: Option<S>,
    args: Option<A>,
}

impl<S: State, A> TransitionBuilder<S, A> {
    pub fn new() -> Self {
        Self {
            action: None,
            from: None,
            to: None,
            args: None,
        }
    }

    /// Set the action name (required, non-empty).
    pub fn action(mut self, name: impl Into<String>) -> Self {
        self.action = Some(name.into());
        self
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Use `state` as both source and target.
    pub fn within(mut self, state: S) -> Self {
        self.from = Some(state.clone());
        self.to = Some(state);
        self
    }

    /// Set the payload (required).
    pub fn args(mut self, args: A) -> Self {
        self.args = Some(args);
        self
    }

    /// Check every field, reporting all problems at once.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let checks = vec![
            match self.action.as_deref() {
                None => Validation::fail(BuildError::MissingActionName),
                Some("") => Validation::fail(BuildError::EmptyActionName),
                Some(_) => Validation::success(()),
            },
            present(&self.from, BuildError::MissingFromState),
            present(&self.to, BuildError::MissingToState),
            present(&self.args, BuildError::MissingArgs),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the descriptor, stopping at the first missing field.
    pub fn build(self) -> Result<TransitionDescriptor<S, A>, BuildError> {
        let action = self.action.ok_or(BuildError::MissingActionName)?;
        if action.is_empty() {
            return Err(BuildError::EmptyActionName);
        }
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;
        let args = self.args.ok_or(BuildError::MissingArgs)?;

        Ok(TransitionDescriptor {
            action,
            from,
            to,
            args,
        })
    }
}

impl<S: State, A> Default for TransitionBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

fn present<T>(field: &Option<T>, missing: BuildError) -> Validation<(), NonEmptyVec<BuildError>> {
    match field {
        Some(_) => Validation::success(()),
        None => Validation::fail(missing),
    }
}
