//! Reusable observers for regime solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! steer or monitor a [`Solver`] run between steps.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasStep`], [`HasValue`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`CancelFlag`] — stops a run once cancelled from any thread
//! - [`StepLimit`] — stops a run after a fixed number of steps
//! - [`Tracing`] — logs every step through `tracing` and never steers
//!
//! [`Observer`]: regime_core::Observer
//! [`Solver`]: regime_solvers::transient::Solver
//! [`HasStep`]: traits::HasStep
//! [`HasValue`]: traits::HasValue
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod cancel;
mod step_limit;
mod trace;

pub use cancel::CancelFlag;
pub use step_limit::StepLimit;
pub use trace::Tracing;
