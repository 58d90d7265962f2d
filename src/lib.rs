//! Stagehand: exit/action/enter execution for finite-state machines
//!
//! An FSM engine decides *which* transition fires. Stagehand decides *how*
//! it runs: the owner of the machine implements [`EventProcessor`], and a
//! [`DefaultDelegate`] calls its hooks in a fixed order, stopping at the
//! first action failure.
//!
//! # Core Concepts
//!
//! - **State**: identifiers compared by equality via the `State` trait
//! - **EventProcessor**: exit, action, failure and enter hooks
//! - **Delegate**: runs one resolved transition and returns its [`Outcome`]
//! - **PhaseTrace**: optional record of the phases a call went through
//!
//! # Example
//!
//! ```rust
//! use stagehand::{DefaultDelegate, Delegate, EventProcessor, Outcome};
//! use stagehand::define_states;
//!
//! define_states! {
//!     pub enum Doc {
//!         Draft,
//!         Pending,
//!     }
//! }
//!
//! struct Review;
//!
//! impl EventProcessor for Review {
//!     type State = Doc;
//!     type Args = ();
//!     type Output = &'static str;
//!     type Error = String;
//!
//!     fn action(&self, _action: &str, _from: &Doc, _to: &Doc, _args: &()) -> Outcome<&'static str, String> {
//!         Outcome::success("ok")
//!     }
//! }
//!
//! let delegate = DefaultDelegate::new(&Review);
//! let (outcome, trace) = delegate.handle_event_traced("submit", &Doc::Draft, &Doc::Pending, &());
//!
//! assert_eq!(outcome.into_result(), Ok(Some("ok")));
//! assert_eq!(trace.path().len(), 6);
//! ```

pub mod builder;
pub mod core;
pub mod delegate;

// Re-export commonly used types
pub use crate::core::{Phase, State, TransitionDescriptor};
pub use crate::delegate::{DefaultDelegate, Delegate, EventProcessor, Outcome, PhaseTrace};
