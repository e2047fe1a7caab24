//! Frames and the frame-completion rules.
//!
//! ## Classification
//!
//! - **Strike**: exactly one roll, all ten pins.
//! - **Spare**: exactly two rolls totalling ten.
//! - **Open**: everything else, including empty and unfinished frames.
//!
//! ## Completion
//!
//! `closes_frame` and `pins_standing` are pure functions over a roll slice so
//! the rules can be checked without an engine. The tenth frame only differs
//! from the others under `TenthFrame::Regulation`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::TenthFrame;
use super::roll::{pin_sum, Roll, PIN_COUNT};

/// Scoring classification of a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameKind {
    /// One roll of ten pins.
    Strike,
    /// Two rolls totalling ten pins.
    Spare,
    /// Anything else.
    Open,
}

/// The rolls bowled in one frame.
///
/// Holds at most three rolls (three only in a regulation tenth frame), stored
/// inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    rolls: SmallVec<[Roll; 3]>,
}

impl Frame {
    /// Create an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame from existing rolls.
    ///
    /// Does not check completion or pin limits; the engine does that when
    /// rolls are recorded. Useful for building frame sequences by hand.
    #[must_use]
    pub fn from_rolls(rolls: &[Roll]) -> Self {
        Self {
            rolls: SmallVec::from_slice(rolls),
        }
    }

    /// Rolls in delivery order.
    #[must_use]
    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    /// Number of rolls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    /// Check if no roll has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// First roll, if any.
    #[must_use]
    pub fn first(&self) -> Option<Roll> {
        self.rolls.first().copied()
    }

    /// Raw sum of the rolls, with no bonus.
    #[must_use]
    pub fn pin_total(&self) -> u32 {
        pin_sum(&self.rolls)
    }

    /// Classify the frame.
    #[must_use]
    pub fn kind(&self) -> FrameKind {
        match self.rolls.as_slice() {
            [only] if only.is_strike() => FrameKind::Strike,
            [a, b] if a.value() + b.value() == u32::from(PIN_COUNT) => FrameKind::Spare,
            _ => FrameKind::Open,
        }
    }

    pub(crate) fn push(&mut self, roll: Roll) {
        self.rolls.push(roll);
    }
}

/// Whether a frame holding `rolls` accepts no further rolls.
///
/// Outside a regulation tenth frame: two rolls, or a single strike.
/// Regulation tenth frame: two rolls totalling less than ten, or three rolls.
#[must_use]
pub fn closes_frame(rolls: &[Roll], is_final: bool, rule: TenthFrame) -> bool {
    if is_final && rule == TenthFrame::Regulation {
        match rolls {
            [a, b] => a.value() + b.value() < u32::from(PIN_COUNT),
            _ => rolls.len() >= 3,
        }
    } else {
        match rolls {
            [] => false,
            [only] => only.is_strike(),
            _ => true,
        }
    }
}

/// Pins standing for the next delivery in a frame holding `rolls`.
///
/// Returns 0 once the frame is closed. In a regulation tenth frame the pins
/// are re-racked after a strike or spare.
#[must_use]
pub fn pins_standing(rolls: &[Roll], is_final: bool, rule: TenthFrame) -> u8 {
    if closes_frame(rolls, is_final, rule) {
        return 0;
    }

    let rerack = is_final && rule == TenthFrame::Regulation;
    let mut standing = PIN_COUNT;
    for roll in rolls {
        standing = standing.saturating_sub(roll.pins());
        if standing == 0 && rerack {
            standing = PIN_COUNT;
        }
    }
    standing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rolls(pins: &[i32]) -> Vec<Roll> {
        pins.iter().map(|&p| Roll::new(p).unwrap()).collect()
    }

    #[test]
    fn test_frame_kind() {
        assert_eq!(Frame::from_rolls(&rolls(&[10])).kind(), FrameKind::Strike);
        assert_eq!(Frame::from_rolls(&rolls(&[5, 5])).kind(), FrameKind::Spare);
        assert_eq!(Frame::from_rolls(&rolls(&[0, 10])).kind(), FrameKind::Spare);
        assert_eq!(Frame::from_rolls(&rolls(&[3, 4])).kind(), FrameKind::Open);
        assert_eq!(Frame::from_rolls(&rolls(&[7])).kind(), FrameKind::Open);
        assert_eq!(Frame::new().kind(), FrameKind::Open);
        // Three-roll tenth frames are scored as plain sums.
        assert_eq!(Frame::from_rolls(&rolls(&[10, 10, 10])).kind(), FrameKind::Open);
    }

    #[test]
    fn test_frame_accessors() {
        let mut frame = Frame::new();
        assert!(frame.is_empty());
        assert_eq!(frame.first(), None);

        frame.push(Roll::new(6).unwrap());
        frame.push(Roll::new(2).unwrap());
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.first(), Some(Roll::new(6).unwrap()));
        assert_eq!(frame.pin_total(), 8);
    }

    #[test]
    fn test_closes_frame_standard() {
        for is_final in [false, true] {
            let rule = TenthFrame::Closing;
            assert!(!closes_frame(&rolls(&[]), is_final, rule));
            assert!(!closes_frame(&rolls(&[9]), is_final, rule));
            assert!(closes_frame(&rolls(&[10]), is_final, rule));
            assert!(closes_frame(&rolls(&[9, 0]), is_final, rule));
            assert!(closes_frame(&rolls(&[4, 6]), is_final, rule));
        }
        // Non-final frames ignore the tenth-frame rule.
        assert!(closes_frame(&rolls(&[10]), false, TenthFrame::Regulation));
    }

    #[test]
    fn test_closes_frame_regulation_tenth() {
        let rule = TenthFrame::Regulation;
        assert!(!closes_frame(&rolls(&[10]), true, rule));
        assert!(!closes_frame(&rolls(&[10, 10]), true, rule));
        assert!(!closes_frame(&rolls(&[10, 3]), true, rule));
        assert!(!closes_frame(&rolls(&[4, 6]), true, rule));
        assert!(closes_frame(&rolls(&[4, 5]), true, rule));
        assert!(closes_frame(&rolls(&[4, 6, 2]), true, rule));
        assert!(closes_frame(&rolls(&[10, 10, 10]), true, rule));
    }

    #[test]
    fn test_pins_standing() {
        let rule = TenthFrame::Closing;
        assert_eq!(pins_standing(&rolls(&[]), false, rule), 10);
        assert_eq!(pins_standing(&rolls(&[3]), false, rule), 7);
        assert_eq!(pins_standing(&rolls(&[3, 4]), false, rule), 0);
        assert_eq!(pins_standing(&rolls(&[10]), true, rule), 0);
    }

    #[test]
    fn test_pins_standing_regulation_rerack() {
        let rule = TenthFrame::Regulation;
        assert_eq!(pins_standing(&rolls(&[10]), true, rule), 10);
        assert_eq!(pins_standing(&rolls(&[10, 3]), true, rule), 7);
        assert_eq!(pins_standing(&rolls(&[10, 10]), true, rule), 10);
        assert_eq!(pins_standing(&rolls(&[6, 4]), true, rule), 10);
        assert_eq!(pins_standing(&rolls(&[6]), true, rule), 4);
        assert_eq!(pins_standing(&rolls(&[6, 4, 8]), true, rule), 0);
    }

    #[test]
    fn test_frame_serialization() {
        let frame = Frame::from_rolls(&rolls(&[7, 3]));
        let json = serde_json::to_string(&frame).unwrap();
        let back: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(frame, back);
    }
}
