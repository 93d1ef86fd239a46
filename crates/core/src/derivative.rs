//! Caller-supplied rate functions.
//!
//! A [`Derivative`] maps the current value and elapsed time of a run to the
//! instantaneous rate of change of that value. Steppers may evaluate it several
//! times per step with different arguments, so implementations must be pure:
//! the same `(value, elapsed)` always yields the same result.
//!
//! Closures are adapted with [`from_fn`] (infallible) or [`try_from_fn`]
//! (fallible):
//!
//! ```
//! use regime_core::{Derivative, derivative};
//! use uom::si::{f64::Time, time::second};
//!
//! let decay = derivative::from_fn(|y, _t| -2.0 * y);
//! let rate = decay.rate(5.0, Time::new::<second>(0.0)).unwrap();
//! assert_eq!(rate, -10.0);
//! ```

use std::{convert::Infallible, fmt, marker::PhantomData};

use uom::si::f64::Time;

/// A pure function `f(value, elapsed) -> rate`.
pub trait Derivative {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the rate of change at `value` and `elapsed`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the rate cannot be computed. Solvers
    /// propagate this error to their caller without wrapping its contents.
    fn rate(&self, value: f64, elapsed: Time) -> Result<f64, Self::Error>;
}

impl<D: Derivative + ?Sized> Derivative for &D {
    type Error = D::Error;

    fn rate(&self, value: f64, elapsed: Time) -> Result<f64, Self::Error> {
        (**self).rate(value, elapsed)
    }
}

/// An infallible derivative backed by a closure.
///
/// Created with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    f: F,
}

/// Wraps a closure `Fn(value, elapsed) -> rate` as a [`Derivative`].
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(f64, Time) -> f64,
{
    FromFn { f }
}

impl<F> Derivative for FromFn<F>
where
    F: Fn(f64, Time) -> f64,
{
    type Error = Infallible;

    fn rate(&self, value: f64, elapsed: Time) -> Result<f64, Self::Error> {
        Ok((self.f)(value, elapsed))
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// A fallible derivative backed by a closure.
///
/// Created with [`try_from_fn`].
pub struct TryFromFn<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

/// Wraps a closure `Fn(value, elapsed) -> Result<rate, E>` as a [`Derivative`].
pub fn try_from_fn<F, E>(f: F) -> TryFromFn<F, E>
where
    F: Fn(f64, Time) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    TryFromFn {
        f,
        _error: PhantomData,
    }
}

impl<F, E> Derivative for TryFromFn<F, E>
where
    F: Fn(f64, Time) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn rate(&self, value: f64, elapsed: Time) -> Result<f64, Self::Error> {
        (self.f)(value, elapsed)
    }
}

impl<F: Clone, E> Clone for TryFromFn<F, E> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _error: PhantomData,
        }
    }
}

impl<F, E> fmt::Debug for TryFromFn<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryFromFn").finish_non_exhaustive()
    }
}
