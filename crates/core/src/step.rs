/// Something that advances by a rate times a step.
///
/// `x.step(rate, h)` is the explicit update `x + rate * h`, the building block
/// of both the Euler step and each RK4 stage. [`State`](crate::State)
/// implements it with `Delta = Time`; a vector state would implement it
/// elementwise.
pub trait StepIntegrable<Delta> {
    /// Rate of change with respect to `Delta`.
    type Derivative;

    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Shorthand for `<T as StepIntegrable<Delta>>::Derivative`.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;
