use regime_core::{Derivative, State, StepIntegrable, TimeIncrement};

use super::{StepError, Stepper, evaluate};

/// Classic fixed-step 4th-order Runge-Kutta stepper.
///
/// Evaluates the derivative at four stage points and combines them with the
/// weights `1, 2, 2, 1` over `6`:
///
/// ```text
///   k1 = f(y,             t)
///   k2 = f(y + dt/2 * k1, t + dt/2)
///   k3 = f(y + dt/2 * k2, t + dt/2)
///   k4 = f(y + dt   * k3, t + dt)
///
///   y_{n+1} = y + dt/6 * (k1 + 2*k2 + 2*k3 + k4)
///   t_{n+1} = t + dt
/// ```
///
/// Every stage point is a single Euler increment taken from the original
/// `(t, y)`, never from a previous stage point.
#[derive(Debug, Clone)]
pub struct Rk4<D> {
    derivative: D,
    dt: TimeIncrement,
}

impl<D: Derivative> Rk4<D> {
    /// Creates a 4th-order Runge-Kutta stepper.
    pub fn new(derivative: D, dt: TimeIncrement) -> Self {
        Self { derivative, dt }
    }

    /// Returns the derivative this stepper evaluates.
    pub fn derivative(&self) -> &D {
        &self.derivative
    }
}

impl<D: Derivative> Stepper for Rk4<D> {
    type Error = D::Error;

    fn dt(&self) -> TimeIncrement {
        self.dt
    }

    fn advance(&self, state: State) -> Result<State, StepError<Self::Error>> {
        let f = &self.derivative;
        let half = self.dt.half();
        let full = *self.dt;

        let k1 = evaluate(f, state)?;
        let k2 = evaluate(f, state.step(k1, half))?;
        let k3 = evaluate(f, state.step(k2, half))?;
        let k4 = evaluate(f, state.step(k3, full))?;

        let rate = (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0;
        Ok(state.step(rate, full))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;

    use approx::assert_relative_eq;
    use regime_core::derivative;
    use thiserror::Error;
    use uom::si::{f64::Time, time::second};

    fn dt(seconds: f64) -> TimeIncrement {
        TimeIncrement::from_seconds(seconds).unwrap()
    }

    #[test]
    fn integrates_polynomial_in_time_exactly() {
        // dy/dt = 3t², so y(t) = t³ and RK4 is exact for cubics.
        let rk4 = Rk4::new(
            derivative::from_fn(|_y, t| 3.0 * t.get::<second>().powi(2)),
            dt(0.5),
        );

        let next = rk4.advance(State::new(Time::new::<second>(1.0), 1.0)).unwrap();

        assert_relative_eq!(next.value, 1.5_f64.powi(3), epsilon = 1e-12);
        assert_relative_eq!(next.elapsed_seconds(), 1.5);
    }

    #[test]
    fn matches_taylor_expansion_for_linear_decay() {
        // For dy/dt = λy one RK4 step multiplies y by 1 + z + z²/2 + z³/6 + z⁴/24, z = λ·dt.
        let lambda = -2.0;
        let h = 0.1;
        let rk4 = Rk4::new(derivative::from_fn(move |y, _t| lambda * y), dt(h));

        let next = rk4.advance(State::initial(5.0)).unwrap();

        let z: f64 = lambda * h;
        let growth = 1.0 + z + z.powi(2) / 2.0 + z.powi(3) / 6.0 + z.powi(4) / 24.0;
        assert_relative_eq!(next.value, 5.0 * growth, epsilon = 1e-12);
    }

    #[test]
    fn stages_start_from_the_original_state() {
        let calls = RefCell::new(Vec::new());
        let rk4 = Rk4::new(
            derivative::from_fn(|y, t| {
                calls.borrow_mut().push((y, t.get::<second>()));
                1.0
            }),
            dt(0.2),
        );

        let next = rk4.advance(State::new(Time::new::<second>(1.0), 10.0)).unwrap();

        // With a constant rate of 1, each stage point is y + h·1 from y = 10.
        let calls = calls.borrow();
        assert_eq!(calls.len(), 4);
        let expected = [(10.0, 1.0), (10.1, 1.1), (10.1, 1.1), (10.2, 1.2)];
        for ((y, t), (ey, et)) in calls.iter().zip(expected) {
            assert_relative_eq!(*y, ey, epsilon = 1e-12);
            assert_relative_eq!(*t, et, epsilon = 1e-12);
        }
        assert_relative_eq!(next.value, 10.2, epsilon = 1e-12);
    }

    #[test]
    fn rejects_non_finite_value() {
        let rk4 = Rk4::new(derivative::from_fn(|y, _t| y), dt(1.0));

        let err = rk4.advance(State::initial(f64::NAN)).unwrap_err();

        assert!(matches!(err, StepError::NonFiniteValue(v) if v.is_nan()));
    }

    #[test]
    fn stops_at_the_failing_stage() {
        #[derive(Debug, Error, PartialEq)]
        #[error("no quote at t = {0}")]
        struct NoQuote(f64);

        let calls = RefCell::new(0);
        let rk4 = Rk4::new(
            derivative::try_from_fn(|y, t| {
                *calls.borrow_mut() += 1;
                let t = t.get::<second>();
                if t > 0.0 { Err(NoQuote(t)) } else { Ok(y) }
            }),
            dt(0.5),
        );

        let err = rk4.advance(State::initial(1.0)).unwrap_err();

        assert_eq!(err, StepError::Derivative(NoQuote(0.25)));
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let rk4 = Rk4::new(derivative::from_fn(|y, t| y.cos() - t.get::<second>()), dt(0.037));
        let state = State::new(Time::new::<second>(2.5), -0.75);

        let a = rk4.advance(state).unwrap();
        let b = rk4.advance(state).unwrap();

        assert_eq!(a.value.to_bits(), b.value.to_bits());
        assert_eq!(a.elapsed, b.elapsed);
    }
}
