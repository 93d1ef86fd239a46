//! Forecasts a short quote series with a mean-reverting affine drift.

use std::error::Error;

use jiff::{SignedDuration, Timestamp};
use regime_demos::{init_tracing, print_columns};
use regime_estimators::{AffineDrift, AffineEstimator, Observation, RegimeEstimator};
use regime_solvers::{stepper::Method, transient::{Config, Trajectory}};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let now = Timestamp::now();
    let minutes = |m: i64| now + SignedDuration::from_mins(m);

    let quotes = (-4..=0)
        .zip([101.2, 100.8, 101.9, 102.4, 102.1])
        .map(|(m, value)| Observation::new(minutes(m), value))
        .collect();

    // Reverts toward 100 at 0.01 per second, slightly damped by the regime term.
    let drift = AffineDrift::new(1.05, -0.01, -0.0005);
    let estimator = RegimeEstimator::new(quotes, drift, AffineEstimator::new(0.0, 1.0))?;

    if let Some(equilibrium) = drift.equilibrium() {
        info!(equilibrium, "drift equilibrium");
    }

    let config = Config::from_seconds(Method::Rk4, 15.0)?;
    let forecast = estimator.forecast(&config, minutes(10))?;
    info!(status = ?forecast.status, points = forecast.trajectory.len(), "forecast done");

    let estimates: Trajectory = forecast.estimates.try_into()?;
    print_columns(&[("state", &forecast.trajectory), ("estimate", &estimates)]);

    Ok(())
}
