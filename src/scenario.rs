use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
#[cfg(feature = "serde_support")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::bezier::{generate_stretched_curve, DEFAULT_CURVE_FACTOR};
use crate::parabola::{generate_trajectory_with_any_acceleration, DEFAULT_ACCELERATION_CURVE_FACTOR};
use crate::point::{Acceleration, Point};
use crate::trajectory::Trajectory;

fn default_curve_factor() -> f64 {
    DEFAULT_CURVE_FACTOR
}

fn default_acceleration_curve_factor() -> f64 {
    DEFAULT_ACCELERATION_CURVE_FACTOR
}

/// Parameters of one stretched Bezier arc.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct StretchedCase {
    pub start: Point,
    pub end: Point,
    pub num_frames: usize,
    #[cfg_attr(feature = "serde_support", serde(default = "default_curve_factor"))]
    pub curve_factor: f64,
}

impl StretchedCase {
    pub fn new(start: Point, end: Point, num_frames: usize) -> Self {
        Self {
            start,
            end,
            num_frames,
            curve_factor: default_curve_factor(),
        }
    }

    pub fn generate(&self) -> Trajectory {
        generate_stretched_curve(self.start, self.end, self.num_frames, self.curve_factor)
    }

    pub fn label(&self) -> String {
        format!(
            "Start ({}, {}) → End ({}, {})",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}

/// Parameters of one constant-acceleration path.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct AcceleratedCase {
    pub start: Point,
    pub end: Point,
    pub num_frames: usize,
    pub acceleration: Acceleration,
    #[cfg_attr(
        feature = "serde_support",
        serde(default = "default_acceleration_curve_factor")
    )]
    pub curve_factor: f64,
}

impl AcceleratedCase {
    pub fn new(start: Point, end: Point, num_frames: usize, acceleration: Acceleration) -> Self {
        Self {
            start,
            end,
            num_frames,
            acceleration,
            curve_factor: default_acceleration_curve_factor(),
        }
    }

    pub fn generate(&self) -> Trajectory {
        generate_trajectory_with_any_acceleration(
            self.start,
            self.end,
            self.num_frames,
            self.acceleration,
            self.curve_factor,
        )
    }
}

/// Left-to-right, right-to-left and vertical arcs.
pub fn default_stretched_cases() -> Vec<StretchedCase> {
    vec![
        StretchedCase::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0), 60),
        StretchedCase::new(Point::new(5.0, 0.0), Point::new(0.0, 5.0), 60),
        StretchedCase::new(Point::new(2.0, 0.0), Point::new(2.0, 5.0), 60),
    ]
}

pub fn default_accelerated_case() -> AcceleratedCase {
    AcceleratedCase {
        curve_factor: 1.2,
        ..AcceleratedCase::new(
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            50,
            Acceleration::new(-2.0, -5.0),
        )
    }
}

/// Reads a JSON array of cases, e.g. a list of [`StretchedCase`].
#[cfg(feature = "serde_support")]
pub fn cases_from_json<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cases_generate_full_trajectories() {
        for case in default_stretched_cases() {
            let trajectory = case.generate();

            assert_eq!(trajectory.len(), case.num_frames);
            assert_eq!(trajectory.first(), Some(case.start));
            assert_eq!(trajectory.last(), Some(case.end));
        }

        let case = default_accelerated_case();
        let trajectory = case.generate();
        assert_eq!(trajectory.len(), 50);
        assert!(trajectory.is_finite());
    }

    #[test]
    fn test_label() {
        let case = StretchedCase::new(Point::new(2.0, 0.0), Point::new(2.0, 5.5), 60);

        assert_eq!(case.label(), "Start (2, 0) → End (2, 5.5)");
    }

    #[cfg(feature = "serde_support")]
    #[test]
    fn test_cases_from_json() {
        let json = r#"[
            {"start": {"x": 0.0, "y": 0.0}, "end": {"x": 5.0, "y": 5.0}, "num_frames": 60},
            {"start": {"x": 2.0, "y": 0.0}, "end": {"x": 2.0, "y": 5.0}, "num_frames": 10, "curve_factor": 1.5}
        ]"#;

        let cases: Vec<StretchedCase> = cases_from_json(json).unwrap();

        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].curve_factor, DEFAULT_CURVE_FACTOR);
        assert_eq!(cases[1].curve_factor, 1.5);
        assert_eq!(cases[1].num_frames, 10);
    }

    #[cfg(feature = "serde_support")]
    #[test]
    fn test_accelerated_case_from_json() {
        let json = r#"[{
            "start": {"x": 0.0, "y": 0.0},
            "end": {"x": 5.0, "y": 5.0},
            "num_frames": 50,
            "acceleration": {"x": -2.0, "y": -5.0}
        }]"#;

        let cases: Vec<AcceleratedCase> = cases_from_json(json).unwrap();

        assert_eq!(cases[0].curve_factor, DEFAULT_ACCELERATION_CURVE_FACTOR);
        assert_eq!(cases[0].acceleration, Acceleration::new(-2.0, -5.0));
    }

    #[cfg(feature = "serde_support")]
    #[test]
    fn test_cases_from_json_rejects_garbage() {
        assert!(cases_from_json::<StretchedCase>("{\"start\": 1}").is_err());
    }
}
