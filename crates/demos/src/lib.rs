//! Shared setup for the runnable demos in `examples/`.
//!
//! Run one with, for example:
//!
//! ```text
//! RUST_LOG=regime_solvers=trace cargo run -p regime-demos --example decay
//! ```

use regime_solvers::transient::Trajectory;
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Prints trajectories side by side, one row per point.
///
/// Rows stop at the shortest trajectory.
pub fn print_columns(columns: &[(&str, &Trajectory)]) {
    let Some(&(_, first)) = columns.first() else {
        return;
    };

    print!("{:<28}", "timestamp");
    for (name, _) in columns {
        print!("{name:>16}");
    }
    println!();

    let rows = columns.iter().map(|(_, t)| t.len()).min().unwrap_or(0);
    for row in 0..rows {
        print!("{:<28}", first[row].timestamp.to_string());
        for (_, trajectory) in columns {
            print!("{:>16.8}", trajectory[row].value);
        }
        println!();
    }
}
