use regime_core::{Derivative, State, StepIntegrable, TimeIncrement};

use super::{StepError, Stepper, evaluate};

/// A first-order explicit stepper using the forward Euler method.
///
/// Applies the update rule:
///
/// ```text
///   rate          = f(value_n, elapsed_n)
///   value_{n+1}   = value_n   + dt * rate
///   elapsed_{n+1} = elapsed_n + dt
/// ```
#[derive(Debug, Clone)]
pub struct Euler<D> {
    derivative: D,
    dt: TimeIncrement,
}

impl<D: Derivative> Euler<D> {
    /// Creates a forward Euler stepper.
    pub fn new(derivative: D, dt: TimeIncrement) -> Self {
        Self { derivative, dt }
    }

    /// Returns the derivative this stepper evaluates.
    pub fn derivative(&self) -> &D {
        &self.derivative
    }
}

impl<D: Derivative> Stepper for Euler<D> {
    type Error = D::Error;

    fn dt(&self) -> TimeIncrement {
        self.dt
    }

    fn advance(&self, state: State) -> Result<State, StepError<Self::Error>> {
        let rate = evaluate(&self.derivative, state)?;
        Ok(state.step(rate, *self.dt))
    }
}
