use regime_core::Observer;

use crate::traits::{CanStopEarly, HasStep};

/// Stops a run once it has completed `max_steps` steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepLimit {
    max_steps: usize,
}

impl StepLimit {
    #[must_use]
    pub fn new(max_steps: usize) -> Self {
        Self { max_steps }
    }

    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}

impl<E: HasStep, A: CanStopEarly> Observer<E, A> for StepLimit {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.step() >= self.max_steps).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use jiff::Timestamp;
    use regime_core::{TimeIncrement, Window, derivative};
    use regime_solvers::{
        stepper::Rk4,
        transient::{Solver, Status},
    };

    #[test]
    fn stops_at_the_limit() {
        let window = Window::new(
            Timestamp::from_second(0).unwrap(),
            Timestamp::from_second(60).unwrap(),
        )
        .unwrap();
        let stepper = Rk4::new(
            derivative::from_fn(|_y, _t| 0.5),
            TimeIncrement::from_seconds(1.0).unwrap(),
        );
        let mut solver = Solver::new(stepper, window).unwrap();

        let status = solver.run_observed(0.0, StepLimit::new(8)).unwrap();

        assert_eq!(status, Status::StoppedByObserver);
        assert_eq!(solver.trajectory().len(), 8);
        assert_relative_eq!(solver.trajectory()[7].value, 4.0);
    }

    #[test]
    fn limit_beyond_the_window_lets_the_run_complete() {
        let window = Window::new(
            Timestamp::from_second(0).unwrap(),
            Timestamp::from_second(5).unwrap(),
        )
        .unwrap();
        let stepper = Rk4::new(
            derivative::from_fn(|y, _t| -y),
            TimeIncrement::from_seconds(1.0).unwrap(),
        );
        let mut solver = Solver::new(stepper, window).unwrap();

        let status = solver.run_observed(1.0, StepLimit::new(100)).unwrap();

        assert_eq!(status, Status::Complete);
    }
}
