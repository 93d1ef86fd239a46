use std::{ops::Index, slice};

use jiff::Timestamp;
use thiserror::Error;

/// A recorded `(timestamp, value)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub timestamp: Timestamp,
    pub value: f64,
}

/// The ordered output of a run, one point per completed step.
///
/// Timestamps are strictly increasing. A trajectory is append-only while its
/// solver runs and read-only everywhere else.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct Trajectory {
    points: Vec<Point>,
}

/// Error returned when building a trajectory from unordered points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("point {index} is not after the point before it")]
pub struct UnorderedError {
    pub index: usize,
}

impl Trajectory {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, point: Point) {
        debug_assert!(self.last().is_none_or(|last| last.timestamp < point.timestamp));
        self.points.push(point);
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Iterates over the recorded timestamps.
    pub fn timestamps(&self) -> impl Iterator<Item = Timestamp> + '_ {
        self.points.iter().map(|p| p.timestamp)
    }

    /// Iterates over the recorded values.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }
}

impl TryFrom<Vec<Point>> for Trajectory {
    type Error = UnorderedError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        match points
            .windows(2)
            .position(|pair| pair[1].timestamp <= pair[0].timestamp)
        {
            Some(i) => Err(UnorderedError { index: i + 1 }),
            None => Ok(Self { points }),
        }
    }
}

impl From<Trajectory> for Vec<Point> {
    fn from(trajectory: Trajectory) -> Self {
        trajectory.points
    }
}

impl Index<usize> for Trajectory {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for Trajectory {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
