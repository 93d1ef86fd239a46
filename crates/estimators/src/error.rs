use jiff::Timestamp;
use regime_core::TimeError;
use regime_solvers::transient::{ConfigError, Error};
use thiserror::Error;

/// Errors raised by the affine estimators and observation series checks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    #[error("values provided for estimation must be finite, got {0}")]
    NonFinite(f64),

    #[error("observation series is empty")]
    EmptySeries,

    #[error("observation {index} at {timestamp} is not after the one before it")]
    Unordered { index: usize, timestamp: Timestamp },
}

/// Errors that can occur while forecasting from an observation series.
///
/// `E` is the error type of the drift.
#[derive(Debug, Error)]
pub enum ForecastError<E> {
    #[error("forecast window is invalid: {0}")]
    Window(#[from] TimeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("forecast run failed: {0}")]
    Run(#[source] Error<E>),

    #[error("estimate failed: {0}")]
    Estimate(#[source] EstimatorError),
}
