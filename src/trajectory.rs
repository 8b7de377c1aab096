use alloc::vec::Vec;
#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::error::{TrajectoryError, TrajectoryResult};
use crate::point::Point;

/// A sampled path: x and y coordinates, index-aligned with the sample grid that
/// produced them.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Trajectory {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Trajectory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: Point) {
        self.x.push(point.x);
        self.y.push(point.y);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        Some(Point::new(*self.x.get(index)?, *self.y.get(index)?))
    }

    pub fn first(&self) -> Option<Point> {
        self.get(0)
    }

    pub fn last(&self) -> Option<Point> {
        self.get(self.len().checked_sub(1)?)
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| Point::new(x, y))
    }

    pub fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }

    fn first_non_finite(&self) -> Option<usize> {
        self.points().position(|p| !p.is_finite())
    }

    /// Hands the trajectory back only if every sample is finite.
    pub(crate) fn into_finite(self) -> TrajectoryResult<Self> {
        match self.first_non_finite() {
            Some(index) => Err(TrajectoryError::NonFiniteSample { index }),
            None => Ok(self),
        }
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.y)
    }
}

impl FromIterator<Point> for Trajectory {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut trajectory = Self::with_capacity(iter.size_hint().0);
        for point in iter {
            trajectory.push(point);
        }
        trajectory
    }
}
