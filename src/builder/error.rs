//! Errors raised while assembling descriptors and processors.

use thiserror::Error;

/// Errors that can occur when building transitions and processors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Action name not specified. Call .action(name)")]
    MissingActionName,

    #[error("Action name must not be empty")]
    EmptyActionName,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Transition arguments not specified. Call .args(value)")]
    MissingArgs,

    #[error("Processor action not specified. Call .action(fn) or .action_result(fn)")]
    MissingAction,
}
