/// Control actions supported by the transient solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run after the current point and keep the trajectory so far.
    StopEarly,
}
