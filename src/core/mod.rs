//! Core value types.
//!
//! - State identifiers via the `State` trait
//! - Resolved transition descriptors
//! - The per-call `Phase` machine and timestamped history
//!
//! Nothing here performs side effects.

mod history;
mod phase;
mod state;
mod transition;

pub use history::{StateHistory, StateTransition};
pub use phase::Phase;
pub use state::State;
pub use transition::TransitionDescriptor;
