use regime_core::{Derivative, TimeIncrement, Window};

use crate::stepper::{AnyStepper, Method};

use super::{ConfigError, Solver};

/// Configuration for a transient run: which method, and how large a step.
///
/// With the `serde` feature a config deserializes from
/// `{ "method": "rk4", "dt_seconds": 0.1 }`, and the step size is validated
/// while deserializing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig", into = "RawConfig")
)]
pub struct Config {
    method: Method,
    dt: TimeIncrement,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good value, unwrap is safe
        Self::new(Method::Rk4, TimeIncrement::from_seconds(1.0).unwrap())
    }
}

impl Config {
    #[must_use]
    pub fn new(method: Method, dt: TimeIncrement) -> Self {
        Self { method, dt }
    }

    /// Creates a config with the step size given in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Increment`] if `dt_seconds` is not a valid step.
    pub fn from_seconds(method: Method, dt_seconds: f64) -> Result<Self, ConfigError> {
        Ok(Self::new(method, TimeIncrement::from_seconds(dt_seconds)?))
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    #[must_use]
    pub fn dt(&self) -> TimeIncrement {
        self.dt
    }

    /// Builds a solver for `derivative` over `window`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::StepResolution`] if the step is not a whole
    /// number of nanoseconds, or [`ConfigError::StepExceedsWindow`] if it
    /// does not fit in the window.
    pub fn solver<D: Derivative>(
        &self,
        derivative: D,
        window: Window,
    ) -> Result<Solver<AnyStepper<D>>, ConfigError> {
        Solver::new(self.method.stepper(derivative, self.dt), window)
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
struct RawConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    method: Method,
    dt_seconds: f64,
}

impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::from_seconds(raw.method, raw.dt_seconds)
    }
}

impl From<Config> for RawConfig {
    fn from(config: Config) -> Self {
        Self {
            method: config.method,
            dt_seconds: config.dt.seconds(),
        }
    }
}
