use uom::si::f64::Time;

use super::Point;

/// Event emitted by the solver after each completed step.
///
/// Steps are numbered from 1; the initial value is not a recorded point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number of the point just appended.
    pub step: usize,

    /// Elapsed time since the start of the window.
    pub elapsed: Time,

    /// The point appended to the trajectory.
    pub point: Point,
}
