use regime_core::{TimeError, TimeIncrementError};
use thiserror::Error;

use crate::stepper::StepError;

/// Errors detected before any stepping occurs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("integration step of {dt} s exceeds the integration window of {span} s")]
    StepExceedsWindow { dt: f64, span: f64 },

    #[error("integration step of {dt} s is not a whole number of nanoseconds")]
    StepResolution { dt: f64 },

    #[error(transparent)]
    Increment(#[from] TimeIncrementError),
}

/// Errors that abort a run.
///
/// `E` is the error type of the caller's derivative. Points computed before
/// the failure stay in the solver's trajectory.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error<E> {
    #[error("step {step} failed: {source}")]
    Step {
        step: usize,
        #[source]
        source: StepError<E>,
    },

    #[error("step {step} produced an unrepresentable time: {source}")]
    Time {
        step: usize,
        #[source]
        source: TimeError,
    },
}

impl<E> Error<E> {
    /// Returns the step number that failed.
    pub fn step(&self) -> usize {
        match self {
            Self::Step { step, .. } | Self::Time { step, .. } => *step,
        }
    }

    /// Returns the derivative's own error, if that is what aborted the run.
    pub fn into_derivative_error(self) -> Option<E> {
        match self {
            Self::Step { source, .. } => source.into_derivative_error(),
            Self::Time { .. } => None,
        }
    }
}
