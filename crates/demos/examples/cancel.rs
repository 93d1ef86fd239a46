//! Stops a long run from another thread with a shared cancel flag.

use std::{error::Error, thread, time::Duration};

use jiff::{SignedDuration, Timestamp};
use regime_core::{Window, derivative};
use regime_demos::init_tracing;
use regime_observers::CancelFlag;
use regime_solvers::{stepper::Method, transient::Config};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let start = Timestamp::now();
    let window = Window::new(start, start + SignedDuration::from_hours(24 * 365))?;

    // A slow derivative so the run is still going when the flag is raised.
    let slow = derivative::from_fn(|y: f64, _t| {
        thread::sleep(Duration::from_micros(50));
        y.cos()
    });

    let config = Config::from_seconds(Method::Rk4, 1.0)?;
    let mut solver = config.solver(slow, window)?;

    let flag = CancelFlag::new();
    let remote = flag.clone();
    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(200));
        remote.cancel();
    });

    let status = solver.run_observed(0.0, flag)?;
    canceller.join().map_err(|_| "canceller thread panicked")?;

    info!(
        ?status,
        points = solver.trajectory().len(),
        last = ?solver.trajectory().last(),
        "run ended",
    );

    Ok(())
}
