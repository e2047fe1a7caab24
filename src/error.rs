//! Error types for the scoring engine.
//!
//! The engine fails fast: a rejected roll never mutates state, so callers can
//! re-prompt and retry with the same engine.

/// Errors raised while recording a roll or loading a stored engine.
///
/// `calculate_score` has no error path.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    /// The pin count is outside `0..=10`.
    #[error("invalid roll: {pins} pins (expected 0 to 10)")]
    InvalidRoll { pins: i32 },

    /// The pin count is larger than the pins left standing in the frame.
    #[error("invalid roll: {pins} pins in frame {frame} but only {standing} standing")]
    PinsExceedStanding { frame: usize, pins: u8, standing: u8 },

    /// A stored game does not hold exactly ten frames.
    #[error("invalid game: {found} frames (expected 10)")]
    FrameCount { found: usize },

    /// A stored frame holds a roll that replay places in a different frame.
    #[error("invalid game: roll stored in frame {frame} belongs to another frame")]
    MisplacedRoll { frame: usize },
}

impl ScoringError {
    /// Static identifier for the error variant, for matching in logs and tests.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            ScoringError::InvalidRoll { .. } => "invalid_roll",
            ScoringError::PinsExceedStanding { .. } => "pins_exceed_standing",
            ScoringError::FrameCount { .. } => "frame_count",
            ScoringError::MisplacedRoll { .. } => "misplaced_roll",
        }
    }
}
