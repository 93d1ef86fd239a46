use std::{fmt, str::FromStr};

use regime_core::{Derivative, State, TimeIncrement};
use thiserror::Error;

use super::{Euler, Rk4, StepError, Stepper};

/// An integration method selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Method {
    /// Forward Euler, first order.
    Euler,

    /// Classic 4th-order Runge-Kutta.
    #[default]
    Rk4,
}

impl Method {
    /// Returns the global order of accuracy of the method.
    ///
    /// Halving `dt` shrinks the global error by roughly `2^order`.
    #[must_use]
    pub fn order(self) -> u32 {
        match self {
            Self::Euler => 1,
            Self::Rk4 => 4,
        }
    }

    /// Builds a stepper for this method.
    pub fn stepper<D: Derivative>(self, derivative: D, dt: TimeIncrement) -> AnyStepper<D> {
        match self {
            Self::Euler => AnyStepper::Euler(Euler::new(derivative, dt)),
            Self::Rk4 => AnyStepper::Rk4(Rk4::new(derivative, dt)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Euler => "euler",
            Self::Rk4 => "rk4",
        })
    }
}

/// Error returned when a method name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown integration method `{0}`, expected `euler` or `rk4`")]
pub struct ParseMethodError(String);

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(Self::Euler),
            "rk4" => Ok(Self::Rk4),
            _ => Err(ParseMethodError(s.to_owned())),
        }
    }
}

/// A stepper whose method was chosen at runtime.
#[derive(Debug, Clone)]
pub enum AnyStepper<D> {
    Euler(Euler<D>),
    Rk4(Rk4<D>),
}

impl<D: Derivative> AnyStepper<D> {
    /// Returns the method this stepper uses.
    pub fn method(&self) -> Method {
        match self {
            Self::Euler(_) => Method::Euler,
            Self::Rk4(_) => Method::Rk4,
        }
    }
}

impl<D: Derivative> Stepper for AnyStepper<D> {
    type Error = D::Error;

    fn dt(&self) -> TimeIncrement {
        match self {
            Self::Euler(s) => s.dt(),
            Self::Rk4(s) => s.dt(),
        }
    }

    fn advance(&self, state: State) -> Result<State, StepError<Self::Error>> {
        match self {
            Self::Euler(s) => s.advance(state),
            Self::Rk4(s) => s.advance(state),
        }
    }
}
