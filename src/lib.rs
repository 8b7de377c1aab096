#![no_std]

extern crate alloc;

pub mod bezier;
pub mod error;
pub mod figure;
pub mod grid;
pub mod parabola;
pub mod point;
pub mod scenario;
pub mod trajectory;

pub use bezier::{generate_stretched_curve, try_generate_stretched_curve, StretchedCurve};
pub use error::{TrajectoryError, TrajectoryResult};
pub use parabola::{
    generate_trajectory_with_any_acceleration, try_generate_trajectory_with_any_acceleration,
    AcceleratedPath,
};
pub use point::{Acceleration, Point};
pub use trajectory::Trajectory;
