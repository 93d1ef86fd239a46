//! Euler and RK4 side by side on `dy/dt = -2y`, `y(0) = 5`, with `dt = 0.1 s`.
//!
//! The exact solution `5 * exp(-2t)` is printed alongside for comparison.

use std::error::Error;

use jiff::{SignedDuration, Timestamp};
use regime_core::{TimeIncrement, Window, derivative};
use regime_demos::{init_tracing, print_columns};
use regime_observers::Tracing;
use regime_solvers::{
    stepper::{Euler, Rk4},
    transient::{Point, Solver, Trajectory},
};
use uom::si::time::second;

const Y0: f64 = 5.0;
const K: f64 = 2.0;

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let start = Timestamp::now();
    let window = Window::new(start, start + SignedDuration::from_secs(2))?;
    let dt = TimeIncrement::from_seconds(0.1)?;
    let decay = derivative::from_fn(|y, _t| -K * y);

    let mut euler = Solver::new(Euler::new(&decay, dt), window)?;
    euler.run_observed(Y0, Tracing::new("euler").every(5))?;

    let mut rk4 = Solver::new(Rk4::new(&decay, dt), window)?;
    rk4.run_observed(Y0, Tracing::new("rk4").every(5))?;

    let exact = rk4
        .trajectory()
        .iter()
        .map(|point| {
            let t = window.elapsed_at(point.timestamp).get::<second>();
            Point {
                timestamp: point.timestamp,
                value: Y0 * (-K * t).exp(),
            }
        })
        .collect::<Vec<_>>();
    let exact = Trajectory::try_from(exact)?;

    print_columns(&[
        ("euler", euler.trajectory()),
        ("rk4", rk4.trajectory()),
        ("exact", &exact),
    ]);

    Ok(())
}
