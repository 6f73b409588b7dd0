use thiserror::Error;

/// Errors raised while configuring a tracker.
///
/// Matching itself never fails; these only surface from construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    #[error("distance threshold must be finite and positive, got {0}")]
    InvalidThreshold(f32),

    #[error("color palette must contain at least one color")]
    EmptyPalette,
}
