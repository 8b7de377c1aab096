//! Constant-acceleration paths.
//!
//! The flight time comes from the vertical axis alone, then the initial velocity
//! is back-solved so that, with a curve factor of one, the path passes through
//! the end point at that flight time.

use alloc::vec::Vec;

use crate::error::{TrajectoryError, TrajectoryResult};
use crate::grid::{accelerated_time_grid, TIME_GRID_EXPONENT};
use crate::point::{Acceleration, Point};
use crate::trajectory::Trajectory;
use nalgebra::Vector2;
use num_traits::Float;
use tracing::{debug, warn};

pub const DEFAULT_ACCELERATION_CURVE_FACTOR: f64 = 1.0;

/// Added to a zero quadratic coefficient to keep the flight time division
/// defined. The result approximates, it is not a limit.
pub const ZERO_ACCELERATION_EPSILON: f64 = 1e-5;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FlightTimeBranch {
    /// `a_y != 0`, the `+sqrt` root of the quadratic.
    Quadratic,
    /// `a_y == 0`, `-B / ε`.
    EpsilonFallback,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlightTime {
    pub seconds: f64,
    pub discriminant: f64,
    pub branch: FlightTimeBranch,
}

impl FlightTime {
    pub fn is_finite(&self) -> bool {
        self.discriminant.is_finite() && self.seconds.is_finite()
    }
}

/// Solves `A*T^2 + B*T + C = 0` with `A = a_y / 2`, `B = -(y1 - y0)` and `C = 0`.
///
/// Only the `+sqrt` root is taken. It is zero whenever the end is not above
/// the start for positive `a_y`, and negative when `a_y < 0` and the end is
/// above the start.
pub fn solve_flight_time(start: Point, end: Point, acceleration: Acceleration) -> FlightTime {
    let a = 0.5 * acceleration.y;
    let b = -end.y + start.y;
    let c = 0.0;

    let discriminant = b.powi(2) - 4.0 * a * c;

    let flight_time = if a != 0.0 {
        FlightTime {
            seconds: (-b + discriminant.sqrt()) / (2.0 * a),
            discriminant,
            branch: FlightTimeBranch::Quadratic,
        }
    } else {
        FlightTime {
            seconds: -b / (a + ZERO_ACCELERATION_EPSILON),
            discriminant,
            branch: FlightTimeBranch::EpsilonFallback,
        }
    };

    debug!(
        seconds = flight_time.seconds,
        branch = ?flight_time.branch,
        "solved flight time"
    );

    flight_time
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AcceleratedPath {
    start: Vector2<f64>,
    acceleration: Vector2<f64>,
    initial_velocity: Vector2<f64>,
    flight_time: FlightTime,
}

impl AcceleratedPath {
    pub fn new(start: Point, end: Point, acceleration: Acceleration, curve_factor: f64) -> Self {
        let flight_time = solve_flight_time(start, end, acceleration);
        Self::with_flight_time(start, end, acceleration, curve_factor, flight_time)
    }

    /// Scaling the initial velocity by `curve_factor` bends the path. Any factor
    /// other than one leaves the end point off the path.
    fn with_flight_time(
        start: Point,
        end: Point,
        acceleration: Acceleration,
        curve_factor: f64,
        flight_time: FlightTime,
    ) -> Self {
        let start: Vector2<f64> = start.into();
        let end: Vector2<f64> = end.into();
        let acceleration: Vector2<f64> = acceleration.into();
        let t = flight_time.seconds;

        let initial_velocity = (end - start - acceleration * 0.5 * t.powi(2)) / t * curve_factor;

        Self {
            start,
            acceleration,
            initial_velocity,
            flight_time,
        }
    }

    pub fn flight_time(&self) -> FlightTime {
        self.flight_time
    }

    pub fn initial_velocity(&self) -> Vector2<f64> {
        self.initial_velocity
    }

    pub fn position_at(&self, t: f64) -> Point {
        (self.start + self.initial_velocity * t + self.acceleration * 0.5 * t.powi(2)).into()
    }

    pub fn time_grid(&self, num_frames: usize) -> Vec<f64> {
        accelerated_time_grid(num_frames, self.flight_time.seconds, TIME_GRID_EXPONENT)
    }

    pub fn sample(&self, num_frames: usize) -> Trajectory {
        self.time_grid(num_frames)
            .into_iter()
            .map(|t| self.position_at(t))
            .collect()
    }
}

/// Samples a constant-acceleration path from `start` towards `end`.
///
/// The last sample sits at `T^1.2` rather than the flight time `T`, so it only
/// lands on `end` when `T` is one. A zero flight time is not rejected and
/// fills the samples with `NaN`/infinities.
pub fn generate_trajectory_with_any_acceleration(
    start: Point,
    end: Point,
    num_frames: usize,
    acceleration: Acceleration,
    curve_factor: f64,
) -> Trajectory {
    AcceleratedPath::new(start, end, acceleration, curve_factor).sample(num_frames)
}

/// Like [`generate_trajectory_with_any_acceleration`], but rejects degenerate
/// frame counts, unusable flight times and non-finite samples.
pub fn try_generate_trajectory_with_any_acceleration(
    start: Point,
    end: Point,
    num_frames: usize,
    acceleration: Acceleration,
    curve_factor: f64,
) -> TrajectoryResult<Trajectory> {
    if num_frames < 2 {
        warn!(num_frames, "rejecting accelerated path");
        return Err(TrajectoryError::TooFewFrames { num_frames });
    }

    let flight_time = solve_flight_time(start, end, acceleration);
    if !flight_time.is_finite() {
        warn!(discriminant = flight_time.discriminant, "flight time is not finite");
        return Err(TrajectoryError::NonFiniteDiscriminant);
    }
    if flight_time.seconds == 0.0 {
        warn!("flight time is zero");
        return Err(TrajectoryError::ZeroFlightTime);
    }

    AcceleratedPath::with_flight_time(start, end, acceleration, curve_factor, flight_time)
        .sample(num_frames)
        .into_finite()
}
