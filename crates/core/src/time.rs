//! Time representation for integration runs.
//!
//! Stepping arithmetic works on elapsed offsets (`uom` [`Time`] since the
//! start of a run). Trajectories and run bounds use absolute
//! [`jiff::Timestamp`]s. [`Window`] converts between the two:
//!
//! ```text
//!   timestamp = start + elapsed
//! ```

mod increment;

use jiff::{SignedDuration, Timestamp};
use thiserror::Error;
use uom::si::{f64::Time, time::second};

pub use increment::{TimeIncrement, TimeIncrementError};

/// Errors that can occur when converting between elapsed and absolute time.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimeError {
    #[error("window end {end} is before its start {start}")]
    Reversed { start: Timestamp, end: Timestamp },

    #[error("offset of {seconds} s from {start} is not a representable timestamp")]
    OutOfRange { start: Timestamp, seconds: f64 },
}

/// The absolute bounds of an integration run.
///
/// A run starts at `start` (zero elapsed time) and continues while
/// `start + elapsed <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    start: Timestamp,
    end: Timestamp,
}

impl Window {
    /// Creates a window from its absolute bounds.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::Reversed`] if `end` is before `start`.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, TimeError> {
        if end < start {
            return Err(TimeError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a window that starts at `start` and lasts `span`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OutOfRange`] if the end is not representable, or
    /// [`TimeError::Reversed`] if `span` is negative.
    pub fn starting_at(start: Timestamp, span: Time) -> Result<Self, TimeError> {
        let end = offset(start, span)?;
        Self::new(start, end)
    }

    #[must_use]
    pub fn start(&self) -> Timestamp {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Returns the length of the window.
    #[must_use]
    pub fn span(&self) -> Time {
        self.elapsed_at(self.end)
    }

    /// Returns the absolute timestamp at `elapsed` past the window start.
    ///
    /// The result is rounded to jiff's nanosecond resolution.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OutOfRange`] if the timestamp is not representable.
    pub fn timestamp_at(&self, elapsed: Time) -> Result<Timestamp, TimeError> {
        offset(self.start, elapsed)
    }

    /// Returns the timestamp `steps` steps of `dt_nanos` past the window start.
    ///
    /// Exact, unlike [`Window::timestamp_at`], so equal steps land on equally
    /// spaced timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OutOfRange`] if the timestamp is not representable.
    pub fn timestamp_after(&self, steps: usize, dt_nanos: i64) -> Result<Timestamp, TimeError> {
        #[allow(clippy::cast_precision_loss)]
        let out_of_range = || TimeError::OutOfRange {
            start: self.start,
            seconds: steps as f64 * dt_nanos as f64 * 1e-9,
        };

        let nanos = i64::try_from(steps)
            .ok()
            .and_then(|steps| steps.checked_mul(dt_nanos))
            .ok_or_else(out_of_range)?;
        self.start
            .checked_add(SignedDuration::from_nanos(nanos))
            .map_err(|_| out_of_range())
    }

    /// Returns the elapsed offset of `timestamp` from the window start.
    ///
    /// Timestamps before the start yield a negative offset.
    #[must_use]
    pub fn elapsed_at(&self, timestamp: Timestamp) -> Time {
        Time::new::<second>(timestamp.duration_since(self.start).as_secs_f64())
    }

    /// Returns `true` if `timestamp` lies within `[start, end]`.
    #[must_use]
    pub fn contains(&self, timestamp: Timestamp) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}

fn offset(start: Timestamp, elapsed: Time) -> Result<Timestamp, TimeError> {
    let seconds = elapsed.get::<second>();
    let out_of_range = || TimeError::OutOfRange { start, seconds };

    let duration = SignedDuration::try_from_secs_f64(seconds).map_err(|_| out_of_range())?;
    start.checked_add(duration).map_err(|_| out_of_range())
}
