//! Core traits and types for fixed-step ODE integration.
//!
//! This crate defines the shared abstractions that steppers, solvers, and
//! observers build on:
//!
//! - [`Derivative`] — a caller-supplied rate function `f(value, elapsed)`
//! - [`State`] — the `(elapsed, value)` pair threaded through every step
//! - [`StepIntegrable`] — the single-step primitive `state + rate * h`
//! - [`TimeIncrement`] — a strictly positive, finite step size
//! - [`Window`] — the absolute start and end of an integration run
//! - [`Observer`] — receives solver events and optionally returns control actions

pub mod derivative;
mod observer;
mod state;
mod step;
mod time;

pub use derivative::Derivative;
pub use observer::Observer;
pub use state::State;
pub use step::{DerivativeOf, StepIntegrable};
pub use time::{TimeError, TimeIncrement, TimeIncrementError, Window};
