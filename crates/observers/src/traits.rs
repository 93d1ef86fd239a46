//! Capability traits for generic observers.
//!
//! These traits abstract over solver event and action types so an observer
//! can be written once and reused.
//!
//! # Example
//!
//! ```rust
//! use regime_core::Observer;
//! use regime_observers::traits::{CanStopEarly, HasValue};
//!
//! /// Stops once the value falls below a floor.
//! struct Floor(f64);
//!
//! impl<E: HasValue, A: CanStopEarly> Observer<E, A> for Floor {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.value() < self.0).then(A::stop_early)
//!     }
//! }
//! ```

use regime_solvers::transient::{Action, Event};
use uom::si::{f64::Time, time::second};

/// An event that carries a step number and elapsed time.
pub trait HasStep {
    /// Returns the step number, starting from 1.
    fn step(&self) -> usize;

    /// Returns the elapsed time since the start of the run.
    fn elapsed(&self) -> Time;

    /// Returns the elapsed time in seconds.
    fn elapsed_seconds(&self) -> f64 {
        self.elapsed().get::<second>()
    }
}

/// An event that carries the current state value.
pub trait HasValue {
    fn value(&self) -> f64;
}

/// An action type with a variant that ends the run.
pub trait CanStopEarly {
    /// The action that ends the run after the current step.
    fn stop_early() -> Self;
}

impl HasStep for Event {
    fn step(&self) -> usize {
        self.step
    }

    fn elapsed(&self) -> Time {
        self.elapsed
    }
}

impl HasValue for Event {
    fn value(&self) -> f64 {
        self.point.value
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
