//! Non-uniform sample grids.
//!
//! Both generators sample a uniform linear grid raised to a power greater than
//! one. Early steps shrink and late steps grow, so successive samples drift
//! further apart towards the end of the path and motion reads as accelerating.

use alloc::vec::Vec;
use num_traits::Float;

/// Exponent applied to the `[0, 1]` Bezier parameter grid.
pub const BEZIER_GRID_EXPONENT: f64 = 1.5;

/// Exponent applied to the elapsed-time grid of an accelerated path.
pub const TIME_GRID_EXPONENT: f64 = 1.2;

/// `i / (num_frames - 1)`, computed in floating point so a single frame yields
/// `NaN` instead of an integer underflow.
fn fraction(i: usize, num_frames: usize) -> f64 {
    i as f64 / (num_frames as f64 - 1.0)
}

/// `x^exponent` that keeps the sign of `x`. Identical to `powf` for `x >= 0`.
pub(crate) fn signed_powf(x: f64, exponent: f64) -> f64 {
    if x < 0.0 {
        -(-x).powf(exponent)
    } else {
        x.powf(exponent)
    }
}

/// `t_i = (i / (num_frames - 1))^exponent` for `i = 0..num_frames`.
///
/// The grid starts at `0.0` and ends at `1.0` for any `num_frames >= 2`.
pub fn accelerated_unit_grid(num_frames: usize, exponent: f64) -> Vec<f64> {
    (0..num_frames)
        .map(|i| fraction(i, num_frames).powf(exponent))
        .collect()
}

/// `τ_i = (i / (num_frames - 1) * total_time)^exponent` for `i = 0..num_frames`.
///
/// The linear time is exponentiated without renormalizing, so the last sample
/// lands on `total_time^exponent` rather than `total_time`. Only a flight time
/// of exactly one (or zero) ends on `total_time`.
pub fn accelerated_time_grid(num_frames: usize, total_time: f64, exponent: f64) -> Vec<f64> {
    (0..num_frames)
        .map(|i| signed_powf(fraction(i, num_frames) * total_time, exponent))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_grid_bounds() {
        let grid = accelerated_unit_grid(60, BEZIER_GRID_EXPONENT);

        assert_eq!(grid.len(), 60);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[59], 1.0);
    }

    #[test]
    fn test_unit_grid_is_monotonic_and_accelerating() {
        let grid = accelerated_unit_grid(20, BEZIER_GRID_EXPONENT);

        let steps: Vec<f64> = grid.windows(2).map(|w| w[1] - w[0]).collect();
        assert!(steps.iter().all(|&step| step > 0.0));
        assert!(
            steps.windows(2).all(|w| w[1] > w[0]),
            "steps should grow towards the end"
        );
    }

    #[test]
    fn test_time_grid_is_not_renormalized() {
        let grid = accelerated_time_grid(50, 4.0, TIME_GRID_EXPONENT);
        let last = *grid.last().unwrap();

        assert_eq!(grid[0], 0.0);
        assert!((last - 4.0_f64.powf(1.2)).abs() < 1e-12);
        assert!(last > 4.0);
    }

    #[test]
    fn test_time_grid_unit_flight_time_ends_on_one() {
        let grid = accelerated_time_grid(10, 1.0, TIME_GRID_EXPONENT);

        assert_eq!(*grid.last().unwrap(), 1.0);
    }

    #[test]
    fn test_time_grid_negative_flight_time_is_finite() {
        let grid = accelerated_time_grid(50, -2.0, TIME_GRID_EXPONENT);

        assert!(grid.iter().all(|t| t.is_finite()));
        assert!(grid.iter().skip(1).all(|&t| t < 0.0));
        assert!((grid[49] + 2.0_f64.powf(1.2)).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_frame_counts() {
        assert!(accelerated_unit_grid(0, BEZIER_GRID_EXPONENT).is_empty());

        let single = accelerated_unit_grid(1, BEZIER_GRID_EXPONENT);
        assert_eq!(single.len(), 1);
        assert!(single[0].is_nan());
    }
}
