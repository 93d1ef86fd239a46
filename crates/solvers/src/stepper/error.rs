use thiserror::Error;

/// Errors that can occur while advancing a state by one step.
///
/// `E` is the error type of the caller's derivative.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StepError<E> {
    /// The state value presented to the stepper is NaN or infinite.
    #[error("state value must be finite, got {0}")]
    NonFiniteValue(f64),

    /// The derivative returned NaN or infinity.
    #[error("derivative returned non-finite rate {rate} at value {value}")]
    NonFiniteRate { value: f64, rate: f64 },

    /// The derivative returned an error.
    #[error("derivative error: {0}")]
    Derivative(#[source] E),
}

impl<E> StepError<E> {
    /// Returns the derivative's own error, if that is what failed.
    pub fn into_derivative_error(self) -> Option<E> {
        match self {
            Self::Derivative(err) => Some(err),
            Self::NonFiniteValue(_) | Self::NonFiniteRate { .. } => None,
        }
    }
}
