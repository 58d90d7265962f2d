//! Transition execution.
//!
//! An FSM engine resolves which transition fires, then hands it to a
//! [`Delegate`]. The [`DefaultDelegate`] runs the owner's
//! [`EventProcessor`] hooks in order:
//!
//! - exit the source state (skipped for self-transitions)
//! - run the action
//! - on failure, run the failure hook and stop
//! - enter the target state (skipped for self-transitions)
//!
//! The action's [`Outcome`] is returned to the engine unchanged.

mod default;
mod outcome;
mod processor;
mod trace;

pub use default::{DefaultDelegate, Delegate};
pub use outcome::Outcome;
pub use processor::EventProcessor;
pub use trace::PhaseTrace;
