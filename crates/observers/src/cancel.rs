use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use regime_core::Observer;

use crate::traits::CanStopEarly;

/// A cloneable cancellation handle for long runs.
///
/// Clone the flag, hand one copy to the solver as its observer, and call
/// [`cancel`](CancelFlag::cancel) on another copy from any thread. The run
/// stops after the step in progress completes.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that every run observed by this flag stop.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for CancelFlag {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.is_cancelled().then(A::stop_early)
    }
}
