use jiff::Timestamp;
use regime_core::{Derivative, Window};
use regime_solvers::transient::{Config, Point, Status, Trajectory};
use tracing::debug;

use crate::{AffineDrift, AffineEstimator, EstimatorError, ForecastError};

/// A single observed value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    pub timestamp: Timestamp,
    pub value: f64,
}

impl Observation {
    #[must_use]
    pub fn new(timestamp: Timestamp, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// The result of a forecast.
///
/// `estimates[i]` is the estimator applied to `trajectory[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub status: Status,
    pub trajectory: Trajectory,
    pub estimates: Vec<Point>,
}

/// Forecasts an observed series by integrating a drift from its last point.
///
/// The series is validated on construction: it must be non-empty, strictly
/// increasing in time, and hold only finite values.
#[derive(Debug, Clone)]
pub struct RegimeEstimator<D = AffineDrift> {
    observations: Vec<Observation>,
    drift: D,
    estimator: AffineEstimator,
}

impl<D: Derivative> RegimeEstimator<D> {
    /// Creates an estimator over `observations`.
    ///
    /// # Errors
    ///
    /// - [`EstimatorError::EmptySeries`] if there are no observations.
    /// - [`EstimatorError::Unordered`] if a timestamp is not after the one
    ///   before it.
    /// - [`EstimatorError::NonFinite`] if any value is NaN or infinite.
    pub fn new(
        observations: Vec<Observation>,
        drift: D,
        estimator: AffineEstimator,
    ) -> Result<Self, EstimatorError> {
        if observations.is_empty() {
            return Err(EstimatorError::EmptySeries);
        }

        if let Some(bad) = observations.iter().find(|obs| !obs.value.is_finite()) {
            return Err(EstimatorError::NonFinite(bad.value));
        }

        if let Some(index) = observations
            .windows(2)
            .position(|pair| pair[1].timestamp <= pair[0].timestamp)
        {
            return Err(EstimatorError::Unordered {
                index: index + 1,
                timestamp: observations[index + 1].timestamp,
            });
        }

        Ok(Self {
            observations,
            drift,
            estimator,
        })
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Returns the most recent observation.
    pub fn last(&self) -> Observation {
        // Non-empty by construction.
        self.observations[self.observations.len() - 1]
    }

    pub fn drift(&self) -> &D {
        &self.drift
    }

    pub fn estimator(&self) -> AffineEstimator {
        self.estimator
    }

    /// Integrates the drift from the last observation to `end` and applies the
    /// estimator to every point of the resulting trajectory.
    ///
    /// # Errors
    ///
    /// - [`ForecastError::Window`] if `end` is before the last observation.
    /// - [`ForecastError::Config`] if the configured step does not fit.
    /// - [`ForecastError::Run`] if a step fails.
    /// - [`ForecastError::Estimate`] if the estimator rejects a value.
    pub fn forecast(
        &self,
        config: &Config,
        end: Timestamp,
    ) -> Result<Forecast, ForecastError<D::Error>> {
        let last = self.last();
        let window = Window::new(last.timestamp, end)?;
        let mut solver = config.solver(&self.drift, window)?;

        debug!(
            method = %config.method(),
            from = %last.timestamp,
            to = %end,
            value = last.value,
            "forecasting",
        );

        let status = solver.run(last.value).map_err(ForecastError::Run)?;
        let trajectory = solver.into_trajectory();

        let estimates = trajectory
            .iter()
            .map(|point| {
                Ok(Point {
                    timestamp: point.timestamp,
                    value: self.estimator.estimate(point.value)?,
                })
            })
            .collect::<Result<Vec<_>, EstimatorError>>()
            .map_err(ForecastError::Estimate)?;

        Ok(Forecast {
            status,
            trajectory,
            estimates,
        })
    }
}
