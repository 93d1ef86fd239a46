//! Windowed fixed-step integration.
//!
//! A [`Solver`] drives a [`Stepper`] from the start of a [`Window`] until the
//! recorded time passes its end:
//!
//! ```text
//!   elapsed = 0, value = initial
//!   while start + elapsed <= end:
//!       (elapsed, value) = stepper.advance(elapsed, value)
//!       trajectory.push(start + elapsed, value)
//! ```
//!
//! The last point may overshoot `end` by up to one `dt`; steps are never
//! clipped to land on the bound.
//!
//! # Observer
//!
//! [`Solver::run_observed`] emits an [`Event`] after every appended point.
//! Returning [`Action::StopEarly`] ends the run between steps with
//! [`Status::StoppedByObserver`], which is how a long run is cancelled.
//!
//! # Failures
//!
//! Before stepping, `dt` must be a whole number of nanoseconds
//! ([`ConfigError::StepResolution`]) and strictly shorter than the window
//! ([`ConfigError::StepExceedsWindow`]). Step `n` then lands exactly on
//! `start + n * dt`. After that, a failing step
//! aborts the run with [`Error`]; the caller's derivative error is carried
//! unchanged and the points computed before the failure remain available
//! through [`Solver::trajectory`].

mod action;
mod config;
mod error;
mod event;
mod status;
mod trajectory;

pub use action::Action;
pub use config::Config;
pub use error::{ConfigError, Error};
pub use event::Event;
pub use status::Status;
pub use trajectory::{Point, Trajectory, UnorderedError};

use regime_core::{Observer, State, Window};
use tracing::{debug, trace};
use uom::si::time::second;

use crate::stepper::Stepper;

const MAX_PREALLOCATED_POINTS: usize = 1 << 16;

/// Owns the time loop and the trajectory of an integration run.
#[derive(Debug, Clone)]
pub struct Solver<S> {
    stepper: S,
    window: Window,
    dt_nanos: i64,
    trajectory: Trajectory,
}

impl<S: Stepper> Solver<S> {
    /// Creates a solver for `window`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::StepResolution`] unless the stepper's `dt` is a whole
    ///   number of nanoseconds, the resolution of trajectory timestamps.
    /// - [`ConfigError::StepExceedsWindow`] unless `dt` is strictly less than
    ///   the window span.
    pub fn new(stepper: S, window: Window) -> Result<Self, ConfigError> {
        let dt = stepper.dt();
        let dt_nanos = dt
            .whole_nanoseconds()
            .ok_or(ConfigError::StepResolution { dt: dt.seconds() })?;

        let span = window.span();
        if *dt >= span {
            return Err(ConfigError::StepExceedsWindow {
                dt: dt.seconds(),
                span: span.get::<second>(),
            });
        }

        let expected_steps = dt.steps_in(span).saturating_add(1);

        Ok(Self {
            stepper,
            window,
            dt_nanos,
            trajectory: Trajectory::with_capacity(expected_steps.min(MAX_PREALLOCATED_POINTS)),
        })
    }

    /// Integrates from `initial_value` across the window without observation.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if any step fails.
    pub fn run(&mut self, initial_value: f64) -> Result<Status, Error<S::Error>> {
        self.run_observed(initial_value, ())
    }

    /// Integrates from `initial_value` across the window.
    ///
    /// Any trajectory from a previous run is discarded first. The observer
    /// receives an [`Event`] after each appended point and may return
    /// [`Action::StopEarly`] to end the run.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if any step fails. The trajectory keeps every
    /// point computed before the failing step.
    pub fn run_observed<Obs>(
        &mut self,
        initial_value: f64,
        mut observer: Obs,
    ) -> Result<Status, Error<S::Error>>
    where
        Obs: Observer<Event, Action>,
    {
        self.trajectory.clear();

        let dt = self.stepper.dt();
        let end = self.window.end();
        debug!(
            start = %self.window.start(),
            %end,
            %dt,
            initial_value,
            "starting integration run"
        );

        let mut state = State::initial(initial_value);
        let mut now = self.window.start();
        let mut step = 0;

        while now <= end {
            step += 1;

            let next = self.stepper.advance(state).map_err(|source| {
                debug!(step, error = %source, "step failed");
                Error::Step { step, source }
            })?;
            now = self
                .window
                .timestamp_after(step, self.dt_nanos)
                .map_err(|source| Error::Time { step, source })?;

            let point = Point {
                timestamp: now,
                value: next.value,
            };
            self.trajectory.push(point);
            state = next;
            trace!(step, timestamp = %now, value = next.value, "step accepted");

            let event = Event {
                step,
                elapsed: next.elapsed,
                point,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                debug!(steps = step, "integration run stopped by observer");
                return Ok(Status::StoppedByObserver);
            }
        }

        debug!(steps = step, "integration run complete");
        Ok(Status::Complete)
    }

    /// Returns the points recorded by the latest run.
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Consumes the solver and returns its trajectory.
    pub fn into_trajectory(self) -> Trajectory {
        self.trajectory
    }

    /// Returns the stepper that advances each step.
    pub fn stepper(&self) -> &S {
        &self.stepper
    }

    /// Returns the window the solver integrates across.
    pub fn window(&self) -> Window {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;
    use jiff::{SignedDuration, Timestamp};
    use regime_core::{TimeIncrement, derivative};
    use thiserror::Error;

    use crate::stepper::{Euler, Rk4, StepError};

    const EPOCH: i64 = 1_700_000_000;

    fn window(seconds: i64) -> Window {
        let start = Timestamp::from_second(EPOCH).unwrap();
        let end = Timestamp::from_second(EPOCH + seconds).unwrap();
        Window::new(start, end).unwrap()
    }

    fn dt(seconds: f64) -> TimeIncrement {
        TimeIncrement::from_seconds(seconds).unwrap()
    }

    fn offset_seconds(window: &Window, point: &Point) -> f64 {
        point.timestamp.duration_since(window.start()).as_secs_f64()
    }

    #[test]
    fn constant_rate_accumulates_linearly() {
        let stepper = Euler::new(derivative::from_fn(|_y, _t| 2.0), dt(1.0));
        let mut solver = Solver::new(stepper, window(5)).unwrap();

        let status = solver.run(0.0).unwrap();

        assert_eq!(status, Status::Complete);
        // Points at 1..=6 s: the point at 5 s still satisfies `<= end`.
        let trajectory = solver.trajectory();
        assert_eq!(trajectory.len(), 6);
        for (i, point) in trajectory.iter().enumerate() {
            let n = (i + 1) as f64;
            assert_relative_eq!(point.value, 2.0 * n);
            assert_relative_eq!(offset_seconds(&solver.window(), point), n);
        }
    }

    #[test]
    fn last_point_overshoots_by_at_most_one_step() {
        let step = 0.3;
        let stepper = Rk4::new(derivative::from_fn(|y, _t| -y), dt(step));
        let mut solver = Solver::new(stepper, window(2)).unwrap();

        solver.run(1.0).unwrap();

        let w = solver.window();
        let trajectory = solver.trajectory();
        let last = trajectory.last().unwrap();
        assert!(last.timestamp > w.end());
        assert!(offset_seconds(&w, last) <= 2.0 + step + 1e-9);
        assert!(
            trajectory.as_slice()[..trajectory.len() - 1]
                .iter()
                .all(|p| p.timestamp <= w.end())
        );
    }

    #[test]
    fn timestamps_are_evenly_spaced() {
        let stepper = Euler::new(derivative::from_fn(|y, _t| 0.5 * y), dt(0.1));
        let mut solver = Solver::new(stepper, window(3)).unwrap();

        solver.run(1.0).unwrap();

        let timestamps: Vec<_> = solver.trajectory().timestamps().collect();
        for pair in timestamps.windows(2) {
            let gap = pair[1].duration_since(pair[0]);
            assert_eq!(gap, SignedDuration::from_millis(100));
        }
    }

    #[test]
    fn step_exceeding_window_fails_before_stepping() {
        let calls = Cell::new(0);
        let stepper = Euler::new(
            derivative::from_fn(|y, _t| {
                calls.set(calls.get() + 1);
                y
            }),
            dt(100.0),
        );

        let err = Solver::new(stepper, window(10)).unwrap_err();

        assert_eq!(
            err,
            ConfigError::StepExceedsWindow {
                dt: 100.0,
                span: 10.0
            }
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn step_finer_than_a_nanosecond_fails() {
        let stepper = Euler::new(derivative::from_fn(|y, _t| y), dt(1e-10));
        assert_eq!(
            Solver::new(stepper, window(1)).unwrap_err(),
            ConfigError::StepResolution { dt: 1e-10 }
        );
    }

    #[test]
    fn step_off_the_nanosecond_grid_fails() {
        let stepper = Euler::new(derivative::from_fn(|y, _t| y), dt(1.5e-9));
        assert!(matches!(
            Solver::new(stepper, window(1)),
            Err(ConfigError::StepResolution { .. })
        ));
    }

    #[test]
    fn nanosecond_steps_are_evenly_spaced() {
        let start = Timestamp::from_second(EPOCH).unwrap();
        let end = start.checked_add(SignedDuration::from_nanos(5)).unwrap();
        let window = Window::new(start, end).unwrap();

        let stepper = Euler::new(derivative::from_fn(|_y, _t| 1.0), dt(1e-9));
        let mut solver = Solver::new(stepper, window).unwrap();
        assert_eq!(solver.run(0.0).unwrap(), Status::Complete);

        let offsets: Vec<i128> = solver
            .trajectory()
            .timestamps()
            .map(|t| t.as_nanosecond() - start.as_nanosecond())
            .collect();
        assert_eq!(offsets, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn step_equal_to_window_fails() {
        let stepper = Euler::new(derivative::from_fn(|y, _t| y), dt(10.0));
        assert!(matches!(
            Solver::new(stepper, window(10)),
            Err(ConfigError::StepExceedsWindow { .. })
        ));
    }

    #[derive(Debug, Error, PartialEq)]
    #[error("quote missing after {0} s")]
    struct QuoteMissing(f64);

    #[test]
    fn derivative_failure_keeps_partial_trajectory() {
        let stepper = Euler::new(
            derivative::try_from_fn(|y, t| {
                let t = t.get::<second>();
                if t >= 3.0 { Err(QuoteMissing(t)) } else { Ok(-y) }
            }),
            dt(1.0),
        );
        let mut solver = Solver::new(stepper, window(10)).unwrap();

        let err = solver.run(8.0).unwrap_err();

        // Steps 1..=3 evaluate at t = 0, 1, 2; step 4 evaluates at t = 3 and fails.
        assert_eq!(err.step(), 4);
        assert_eq!(solver.trajectory().len(), 3);
        assert_eq!(
            solver.trajectory().values().collect::<Vec<_>>(),
            vec![0.0, 0.0, 0.0]
        );
        assert_eq!(err.into_derivative_error(), Some(QuoteMissing(3.0)));
    }

    #[test]
    fn non_finite_initial_value_is_a_domain_error() {
        let stepper = Rk4::new(derivative::from_fn(|y, _t| y), dt(1.0));
        let mut solver = Solver::new(stepper, window(10)).unwrap();

        let err = solver.run(f64::NAN).unwrap_err();

        assert!(matches!(
            err,
            Error::Step {
                step: 1,
                source: StepError::NonFiniteValue(_)
            }
        ));
        assert!(solver.trajectory().is_empty());
    }

    #[test]
    fn observer_can_stop_early() {
        let stepper = Euler::new(derivative::from_fn(|_y, _t| 1.0), dt(0.5));
        let mut solver = Solver::new(stepper, window(100)).unwrap();

        let observer = |event: &Event| (event.step >= 5).then_some(Action::StopEarly);
        let status = solver.run_observed(0.0, observer).unwrap();

        assert_eq!(status, Status::StoppedByObserver);
        assert_eq!(solver.trajectory().len(), 5);
        assert_relative_eq!(solver.trajectory()[4].value, 2.5);
    }

    #[test]
    fn events_mirror_the_trajectory() {
        let stepper = Euler::new(derivative::from_fn(|y, _t| -0.1 * y), dt(1.0));
        let mut solver = Solver::new(stepper, window(4)).unwrap();

        let mut events = Vec::new();
        solver
            .run_observed(1.0, |event: &Event| {
                events.push(*event);
                None
            })
            .unwrap();

        let steps: Vec<_> = events.iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 5]);
        for (event, point) in events.iter().zip(solver.trajectory()) {
            assert_eq!(event.point, *point);
            assert_relative_eq!(event.elapsed.get::<second>(), event.step as f64);
        }
    }

    #[test]
    fn rerun_replaces_previous_trajectory() {
        let stepper = Euler::new(derivative::from_fn(|_y, _t| 1.0), dt(1.0));
        let mut solver = Solver::new(stepper, window(3)).unwrap();

        solver.run(0.0).unwrap();
        let first = solver.trajectory().clone();
        solver.run(10.0).unwrap();

        assert_eq!(solver.trajectory().len(), first.len());
        assert_relative_eq!(solver.trajectory()[0].value, 11.0);
    }
}
