//! Scoring configuration.
//!
//! The lane layout is fixed: ten frames of ten pins. The only choice a caller
//! makes is how the tenth frame closes.

use serde::{Deserialize, Serialize};

/// Frames in one game.
pub const FRAME_COUNT: usize = 10;

/// Index of the final frame.
pub const FINAL_FRAME: usize = FRAME_COUNT - 1;

/// How the tenth frame closes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenthFrame {
    /// The tenth frame closes like every other frame: after a strike or after
    /// two rolls. No bonus deliveries are granted, so ten strikes score 270.
    #[default]
    Closing,
    /// Regulation rules: a strike or spare in the tenth frame earns bonus
    /// deliveries (up to three rolls), and the frame scores the plain sum of
    /// its rolls. Twelve strikes score 300.
    Regulation,
}

/// Engine configuration.
///
/// ```
/// use bowling_score::core::{ScoringConfig, TenthFrame};
///
/// let config = ScoringConfig::default().with_tenth_frame(TenthFrame::Regulation);
/// assert_eq!(config.tenth_frame, TenthFrame::Regulation);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Tenth-frame closure rule.
    pub tenth_frame: TenthFrame,
}

impl ScoringConfig {
    /// Configuration with regulation tenth-frame bonus deliveries.
    #[must_use]
    pub fn regulation() -> Self {
        Self::default().with_tenth_frame(TenthFrame::Regulation)
    }

    /// Set the tenth-frame rule.
    #[must_use]
    pub fn with_tenth_frame(mut self, rule: TenthFrame) -> Self {
        self.tenth_frame = rule;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScoringConfig::default();
        assert_eq!(config.tenth_frame, TenthFrame::Closing);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ScoringConfig::default().with_tenth_frame(TenthFrame::Regulation);
        assert_eq!(config, ScoringConfig::regulation());
    }

    #[test]
    fn test_serialization() {
        let config = ScoringConfig::regulation();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ScoringConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
