use std::{
    fmt,
    ops::{Add, Deref},
};

use thiserror::Error;
use uom::{
    Conversion,
    si::{
        f64::Time,
        time::{self, second},
    },
};

/// The step size `dt` of a fixed-step integrator.
///
/// Always finite and strictly positive, so every step moves elapsed time
/// forward by the same amount.
///
/// ```
/// use regime_core::TimeIncrement;
/// use uom::si::time::millisecond;
///
/// let dt = TimeIncrement::new::<millisecond>(250.0)?;
/// assert_eq!(dt, TimeIncrement::from_seconds(0.25)?);
/// assert_eq!(dt.to_string(), "0.25 s");
/// # Ok::<(), regime_core::TimeIncrementError>(())
/// ```
///
/// Dereferences to [`Time`], and a `Time` plus a `TimeIncrement` is the
/// `Time` one step later.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeIncrement(Time);

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimeIncrementError {
    #[error("step size must be greater than zero, got {0} s")]
    NotPositive(f64),

    #[error("step size must be finite")]
    NotFinite,
}

impl TimeIncrement {
    /// Creates a step of `value` in unit `U`.
    ///
    /// # Errors
    ///
    /// [`TimeIncrementError::NotFinite`] for NaN or infinite values,
    /// [`TimeIncrementError::NotPositive`] for zero or negative ones.
    pub fn new<U>(value: f64) -> Result<Self, TimeIncrementError>
    where
        U: time::Unit + Conversion<f64, T = f64>,
    {
        Self::from_time(Time::new::<U>(value))
    }

    /// Creates a step of `seconds`.
    ///
    /// # Errors
    ///
    /// Same as [`TimeIncrement::new`].
    pub fn from_seconds(seconds: f64) -> Result<Self, TimeIncrementError> {
        Self::new::<second>(seconds)
    }

    /// Creates a step from a [`Time`].
    ///
    /// # Errors
    ///
    /// Same as [`TimeIncrement::new`].
    pub fn from_time(dt: Time) -> Result<Self, TimeIncrementError> {
        match dt.get::<second>() {
            s if !s.is_finite() => Err(TimeIncrementError::NotFinite),
            s if s <= 0.0 => Err(TimeIncrementError::NotPositive(s)),
            _ => Ok(Self(dt)),
        }
    }

    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.0.get::<second>()
    }

    /// Half a step, the offset of the RK4 midpoint stages.
    #[must_use]
    pub fn half(&self) -> Time {
        self.0 / 2.0
    }

    /// Returns the step as a whole number of nanoseconds.
    ///
    /// `None` if the step is shorter than one nanosecond, is not a whole
    /// number of them beyond floating-point rounding, or does not fit in an
    /// `i64`. Timestamps have nanosecond resolution, so only such steps keep
    /// a trajectory evenly spaced.
    #[must_use]
    pub fn whole_nanoseconds(&self) -> Option<i64> {
        let nanos = self.seconds() * 1e9;
        let whole = nanos.round();
        let tolerance = (4.0 * f64::EPSILON * whole).max(1e-3);

        #[allow(clippy::cast_precision_loss)]
        let too_large = whole >= i64::MAX as f64;
        if whole < 1.0 || too_large || (nanos - whole).abs() > tolerance {
            return None;
        }

        #[allow(clippy::cast_possible_truncation)]
        let whole = whole as i64;
        Some(whole)
    }

    /// Number of whole or partial steps needed to cover `span`.
    ///
    /// Zero for a non-positive span; saturates at `usize::MAX`.
    #[must_use]
    pub fn steps_in(&self, span: Time) -> usize {
        let steps = (span.get::<second>() / self.seconds()).ceil();
        if steps <= 0.0 {
            0
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let steps = steps as usize;
            steps
        }
    }
}

impl TryFrom<Time> for TimeIncrement {
    type Error = TimeIncrementError;

    fn try_from(dt: Time) -> Result<Self, Self::Error> {
        Self::from_time(dt)
    }
}

impl Deref for TimeIncrement {
    type Target = Time;

    fn deref(&self) -> &Time {
        &self.0
    }
}

impl Add<TimeIncrement> for Time {
    type Output = Time;

    fn add(self, dt: TimeIncrement) -> Time {
        self + *dt
    }
}

impl fmt::Display for TimeIncrement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} s", self.seconds())
    }
}
