//! Fixed-step integration of scalar ODEs.
//!
//! # Modules
//!
//! - [`stepper`] — single-step policies ([`stepper::Euler`], [`stepper::Rk4`])
//!   that advance a [`State`](regime_core::State) by one `dt`
//! - [`transient`] — the [`transient::Solver`] that drives a stepper across a
//!   [`Window`](regime_core::Window) and records the trajectory
//!
//! # Example
//!
//! ```
//! use jiff::Timestamp;
//! use regime_core::{TimeIncrement, Window, derivative};
//! use regime_solvers::{stepper::Rk4, transient::{Solver, Status}};
//!
//! let start = Timestamp::from_second(1_700_000_000)?;
//! let end = Timestamp::from_second(1_700_000_002)?;
//! let window = Window::new(start, end)?;
//!
//! let stepper = Rk4::new(derivative::from_fn(|y, _t| -2.0 * y), TimeIncrement::from_seconds(0.1)?);
//! let mut solver = Solver::new(stepper, window)?;
//!
//! assert_eq!(solver.run(5.0)?, Status::Complete);
//! assert!(solver.trajectory().last().is_some_and(|p| p.timestamp > end));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod stepper;
pub mod transient;
