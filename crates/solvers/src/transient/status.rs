/// Indicates how a run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Stepped past the end of the window.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}
