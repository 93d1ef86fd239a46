//! Affine regime estimators.
//!
//! - [`AffineDrift`] — the derivative `f(y) = p + q*y + a*y` fed to a solver
//! - [`AffineEstimator`] — maps a state value to an estimate `g(y) = u + v*y`
//! - [`RegimeEstimator`] — integrates a drift forward from the last point of
//!   an observed series and applies the estimator to the result

mod affine;
mod error;
mod regime;

pub use affine::{AffineDrift, AffineEstimator};
pub use error::{EstimatorError, ForecastError};
pub use regime::{Forecast, Observation, RegimeEstimator};
