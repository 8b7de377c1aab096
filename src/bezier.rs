use crate::error::{TrajectoryError, TrajectoryResult};
use crate::grid::{accelerated_unit_grid, BEZIER_GRID_EXPONENT};
use crate::point::Point;
use crate::trajectory::Trajectory;
use nalgebra::Vector2;
use num_traits::Float;
use tracing::{trace, warn};

/// Curve factor used by the stretched-curve demo cases.
pub const DEFAULT_CURVE_FACTOR: f64 = 0.5;

/// Binomial coefficient `n choose k` as a float, `0.0` when `k > n`.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }

    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Evaluates the Bezier curve through `points` at parameter `t` using the
/// Bernstein basis of degree `points.len() - 1`.
///
/// Works for any number of control points. An empty slice evaluates to the
/// origin.
pub fn bezier_point(points: &[Vector2<f64>], t: f64) -> Vector2<f64> {
    let n = points.len().saturating_sub(1);

    points
        .iter()
        .enumerate()
        .fold(Vector2::zeros(), |acc, (i, p)| {
            let basis = binomial(n, i) * (1.0 - t).powi((n - i) as i32) * t.powi(i as i32);
            acc + p * basis
        })
}

/// Samples the Bezier curve through `points` on the accelerated `[0, 1]` grid.
pub fn bezier_curve(points: &[Vector2<f64>], num_frames: usize) -> Trajectory {
    accelerated_unit_grid(num_frames, BEZIER_GRID_EXPONENT)
        .into_iter()
        .map(|t| Point::from(bezier_point(points, t)))
        .collect()
}

/// Single-control-point arc from `start` to `end`.
///
/// The control point is pushed sideways along the direction of horizontal
/// travel (or to the left for vertical travel) and always sits above the higher
/// endpoint, so the arc bulges upwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StretchedCurve {
    points: [Vector2<f64>; 3],
}

impl StretchedCurve {
    pub fn new(start: Point, end: Point, curve_factor: f64) -> Self {
        Self {
            points: [
                start.into(),
                stretched_control_point(start, end, curve_factor).into(),
                end.into(),
            ],
        }
    }

    pub fn start(&self) -> Point {
        self.points[0].into()
    }

    pub fn control_point(&self) -> Point {
        self.points[1].into()
    }

    pub fn end(&self) -> Point {
        self.points[2].into()
    }

    pub fn control_points(&self) -> &[Vector2<f64>] {
        &self.points
    }

    pub fn get(&self, t: f64) -> Point {
        bezier_point(&self.points, t).into()
    }

    pub fn sample(&self, num_frames: usize) -> Trajectory {
        bezier_curve(&self.points, num_frames)
    }
}

/// Control point for [`StretchedCurve`].
pub fn stretched_control_point(start: Point, end: Point, curve_factor: f64) -> Point {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    let offset_x = if start.x == end.x {
        -dy.abs() * curve_factor
    } else {
        dx.signum() * dx.abs() * curve_factor
    };

    Point::new(
        (start.x + end.x) / 2.0 + offset_x,
        start.y.max(end.y) + curve_factor * dx.abs() + dy.abs() / 2.0,
    )
}

/// Samples a stretched arc from `start` to `end`.
///
/// The first and last samples are exactly `start` and `end`. Fewer than two
/// frames is not rejected: zero frames gives an empty trajectory and one frame
/// gives a `NaN` sample.
pub fn generate_stretched_curve(
    start: Point,
    end: Point,
    num_frames: usize,
    curve_factor: f64,
) -> Trajectory {
    let curve = StretchedCurve::new(start, end, curve_factor);
    trace!(
        num_frames,
        control_x = curve.control_point().x,
        control_y = curve.control_point().y,
        "sampling stretched curve"
    );

    curve.sample(num_frames)
}

/// Like [`generate_stretched_curve`], but rejects degenerate frame counts and
/// non-finite samples.
pub fn try_generate_stretched_curve(
    start: Point,
    end: Point,
    num_frames: usize,
    curve_factor: f64,
) -> TrajectoryResult<Trajectory> {
    if num_frames < 2 {
        warn!(num_frames, "rejecting stretched curve");
        return Err(TrajectoryError::TooFewFrames { num_frames });
    }

    generate_stretched_curve(start, end, num_frames, curve_factor).into_finite()
}
