use uom::si::{f64::Time, time::second};

use crate::StepIntegrable;

/// The scalar state of an integration run at a single point in time.
///
/// `elapsed` is the offset from the start of the run, not an absolute time.
/// Steppers take a `State` by value and return the next one, so every step is
/// a pure function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub elapsed: Time,
    pub value: f64,
}

impl State {
    /// Creates a state at the given elapsed offset.
    #[must_use]
    pub fn new(elapsed: Time, value: f64) -> Self {
        Self { elapsed, value }
    }

    /// Creates the state at the start of a run (zero elapsed time).
    #[must_use]
    pub fn initial(value: f64) -> Self {
        Self::new(Time::new::<second>(0.0), value)
    }

    /// Returns the elapsed offset in seconds.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.get::<second>()
    }
}

/// Applies one explicit Euler increment.
///
/// ```text
///   value_{n+1}   = value_n   + rate * h
///   elapsed_{n+1} = elapsed_n + h
/// ```
///
/// `rate` is the derivative of the value per second.
impl StepIntegrable<Time> for State {
    type Derivative = f64;

    fn step(&self, rate: f64, h: Time) -> Self {
        Self {
            elapsed: self.elapsed + h,
            value: self.value + rate * h.get::<second>(),
        }
    }
}
