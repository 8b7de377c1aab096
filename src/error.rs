use thiserror::Error;

/// Rejections raised by the strict `try_*` generators.
///
/// The plain generators never return these; they let `NaN` and infinities flow
/// into the samples instead.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum TrajectoryError {
    #[error("at least two frames are needed to span a path, got {num_frames}")]
    TooFewFrames { num_frames: usize },
    #[error("solved flight time is zero, initial velocity is undefined")]
    ZeroFlightTime,
    #[error("flight time discriminant is not finite")]
    NonFiniteDiscriminant,
    #[error("sample {index} is not finite")]
    NonFiniteSample { index: usize },
}

pub type TrajectoryResult<T> = Result<T, TrajectoryError>;
