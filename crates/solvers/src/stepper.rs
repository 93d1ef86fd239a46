//! Single-step integration policies.
//!
//! A [`Stepper`] owns a [`Derivative`] and a fixed [`TimeIncrement`] and maps
//! one [`State`] to the next. Steppers keep no per-call state: `advance` takes
//! `&self`, so calling it twice with the same state yields bit-identical
//! results, and one stepper may be shared across threads when its derivative
//! allows it.
//!
//! # Methods
//!
//! - [`Euler`] — first order, one derivative evaluation per step
//! - [`Rk4`] — classical fourth-order Runge-Kutta, four evaluations per step
//! - [`AnyStepper`] — either of the above, chosen at runtime via [`Method`]
//!
//! # Domain checks
//!
//! Every derivative evaluation first rejects a non-finite value with
//! [`StepError::NonFiniteValue`] and then rejects a non-finite rate with
//! [`StepError::NonFiniteRate`]. Errors returned by the derivative itself
//! surface as [`StepError::Derivative`] holding the original error.

mod error;
mod euler;
mod method;
mod rk4;

pub use error::StepError;
pub use euler::Euler;
pub use method::{AnyStepper, Method, ParseMethodError};
pub use rk4::Rk4;

use regime_core::{Derivative, State, TimeIncrement};

/// Advances a [`State`] by one fixed step.
pub trait Stepper {
    /// The error type of the underlying derivative.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the fixed step size.
    fn dt(&self) -> TimeIncrement;

    /// Returns the state one `dt` after `state`.
    ///
    /// # Errors
    ///
    /// Returns a [`StepError`] if a value or rate is not finite, or if the
    /// derivative fails.
    fn advance(&self, state: State) -> Result<State, StepError<Self::Error>>;
}

impl<S: Stepper + ?Sized> Stepper for &S {
    type Error = S::Error;

    fn dt(&self) -> TimeIncrement {
        (**self).dt()
    }

    fn advance(&self, state: State) -> Result<State, StepError<Self::Error>> {
        (**self).advance(state)
    }
}

/// Evaluates the derivative at `state` with the domain checks applied.
fn evaluate<D: Derivative>(derivative: &D, state: State) -> Result<f64, StepError<D::Error>> {
    let State { elapsed, value } = state;
    if !value.is_finite() {
        return Err(StepError::NonFiniteValue(value));
    }

    let rate = derivative
        .rate(value, elapsed)
        .map_err(StepError::Derivative)?;
    if !rate.is_finite() {
        return Err(StepError::NonFiniteRate { value, rate });
    }

    Ok(rate)
}
