use nalgebra::Vector2;
#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// A position in the plane.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Vector2<f64> {
    fn from(point: Point) -> Self {
        Vector2::new(point.x, point.y)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Constant acceleration applied over a whole trajectory.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Acceleration {
    pub x: f64,
    pub y: f64,
}

impl Acceleration {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Acceleration {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Acceleration> for Vector2<f64> {
    fn from(accel: Acceleration) -> Self {
        Vector2::new(accel.x, accel.y)
    }
}
