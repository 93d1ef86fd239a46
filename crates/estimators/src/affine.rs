use regime_core::Derivative;
use uom::si::f64::Time;

use crate::EstimatorError;

fn ensure_finite(value: f64) -> Result<f64, EstimatorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EstimatorError::NonFinite(value))
    }
}

/// A time-invariant affine drift.
///
/// ```text
///   f(y) = p + q*y + a*y
/// ```
///
/// `q` is the mean-reversion coefficient and `a` the regime adjustment; both
/// act linearly on the current value and are kept apart so each can be
/// estimated separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineDrift {
    pub p: f64,
    pub q: f64,
    pub a: f64,
}

impl AffineDrift {
    #[must_use]
    pub fn new(p: f64, q: f64, a: f64) -> Self {
        Self { p, q, a }
    }

    /// Returns the value at which the drift is zero, if any.
    #[must_use]
    pub fn equilibrium(&self) -> Option<f64> {
        let slope = self.q + self.a;
        (slope != 0.0).then(|| -self.p / slope)
    }
}

impl Derivative for AffineDrift {
    type Error = EstimatorError;

    fn rate(&self, value: f64, _elapsed: Time) -> Result<f64, Self::Error> {
        let value = ensure_finite(value)?;
        Ok(self.p + self.q * value + self.a * value)
    }
}

/// An affine map from a state value to an estimate.
///
/// ```text
///   g(y) = u + v*y
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineEstimator {
    pub u: f64,
    pub v: f64,
}

impl AffineEstimator {
    #[must_use]
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    /// The estimator that returns its input unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Returns the estimate for `value`.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::NonFinite`] if `value` is NaN or infinite.
    pub fn estimate(&self, value: f64) -> Result<f64, EstimatorError> {
        let value = ensure_finite(value)?;
        Ok(self.u + self.v * value)
    }
}

impl Default for AffineEstimator {
    fn default() -> Self {
        Self::identity()
    }
}
