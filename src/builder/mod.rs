//! Builders and macros for wiring transitions with little boilerplate.
//!
//! - [`TransitionBuilder`] assembles a [`TransitionDescriptor`](crate::core::TransitionDescriptor)
//! - [`ProcessorBuilder`] assembles an [`EventProcessor`](crate::EventProcessor) from closures
//! - [`define_states!`](crate::define_states) declares enum state identifiers

pub mod error;
pub mod macros;
pub mod processor;
pub mod transition;

pub use error::BuildError;
pub use processor::{FnProcessor, ProcessorBuilder};
pub use transition::TransitionBuilder;
