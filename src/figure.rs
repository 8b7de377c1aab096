//! What a plotting backend needs to draw the trajectories, without drawing
//! anything itself.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::scenario::{AcceleratedCase, StretchedCase};
use crate::trajectory::Trajectory;

/// A trajectory drawn as a line with a marker on every sample.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Series {
    pub label: Option<String>,
    pub trajectory: Trajectory,
}

/// Highlighted scatter points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Markers {
    pub label: String,
    pub color: String,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    pub series: Vec<Series>,
    pub markers: Vec<Markers>,
}

impl Figure {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: "X Position".to_string(),
            y_label: "Y Position".to_string(),
            grid: true,
            series: Vec::new(),
            markers: Vec::new(),
        }
    }

    pub fn add_series(&mut self, label: Option<String>, trajectory: Trajectory) {
        self.series.push(Series { label, trajectory });
    }

    pub fn add_markers(&mut self, label: &str, color: &str, points: Vec<Point>) {
        self.markers.push(Markers {
            label: label.to_string(),
            color: color.to_string(),
            points,
        });
    }

    /// True when a legend has something to show.
    pub fn has_legend(&self) -> bool {
        !self.markers.is_empty() || self.series.iter().any(|s| s.label.is_some())
    }

    #[cfg(feature = "serde_support")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// One labelled series per case on a shared figure.
pub fn stretched_curve_figure(cases: &[StretchedCase]) -> Figure {
    let mut figure = Figure::new("Stretched Curve with Directional Offset");
    for case in cases {
        figure.add_series(Some(case.label()), case.generate());
    }
    figure
}

/// The path plus its start and end highlighted in red.
pub fn accelerated_path_figure(case: &AcceleratedCase) -> Figure {
    let mut figure = Figure::new("Trajectory with Arbitrary Acceleration");
    figure.add_series(None, case.generate());
    figure.add_markers("Start/End", "red", vec![case.start, case.end]);
    figure
}
