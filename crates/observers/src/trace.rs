use regime_core::Observer;
use tracing::{Level, event};

use crate::traits::{HasStep, HasValue};

/// Logs every step as a `tracing` event and never steers the run.
///
/// Events are emitted at `INFO` under the target `regime_observers::trace`,
/// with `label`, `step`, `elapsed_s`, and `value` fields.
#[derive(Debug, Clone)]
pub struct Tracing {
    label: String,
    every: usize,
}

impl Tracing {
    /// Creates an observer that logs every step under `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            every: 1,
        }
    }

    /// Logs only every `n`th step. Zero is treated as one.
    #[must_use]
    pub fn every(mut self, n: usize) -> Self {
        self.every = n.max(1);
        self
    }
}

impl<E: HasStep + HasValue, A> Observer<E, A> for Tracing {
    fn observe(&mut self, e: &E) -> Option<A> {
        if e.step() % self.every == 0 {
            event!(
                Level::INFO,
                label = %self.label,
                step = e.step(),
                elapsed_s = e.elapsed_seconds(),
                value = e.value(),
                "step"
            );
        }
        None
    }
}
