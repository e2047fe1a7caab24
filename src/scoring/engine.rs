//! Per-bowler scoring engine.
//!
//! ## State
//!
//! Ten frames plus a cursor. The cursor points at the frame taking rolls and
//! reaches `FRAME_COUNT` once the game is over; no rolls are accepted after
//! that.
//!
//! ## Example
//!
//! ```
//! use bowling_score::scoring::{RollOutcome, ScoringEngine};
//!
//! let mut engine = ScoringEngine::new();
//! engine.record_roll(5).unwrap();
//! engine.record_roll(5).unwrap();
//! engine.record_roll(4).unwrap();
//!
//! // Spare in frame 1 (10 + 4) plus the 4 in frame 2.
//! assert_eq!(engine.calculate_score(), 18);
//! assert!(engine.record_roll(11).is_err());
//! ```
//!
//! A new game is a new engine; there is no reset.

use serde::{Deserialize, Serialize};

use super::lookahead;
use crate::core::{
    closes_frame, pins_standing, Frame, Roll, ScoringConfig, FINAL_FRAME, FRAME_COUNT,
};
use crate::error::ScoringError;

/// What `record_roll` did with an accepted pin count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollOutcome {
    /// The roll was added to `frame` (0-based). `frame_complete` is true when
    /// this roll closed the frame.
    Recorded { frame: usize, frame_complete: bool },
    /// The game was already complete; nothing changed.
    Ignored,
}

/// Frame and roll data for one bowler in one game.
///
/// Deserialization replays the stored rolls through `record_roll`, so a
/// loaded engine obeys the same rules as one built roll by roll. The stored
/// cursor is ignored and recomputed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EngineSnapshot")]
pub struct ScoringEngine {
    frames: Vec<Frame>,
    current_frame: usize,
    config: ScoringConfig,
}

/// Serialized form of an engine, validated on load.
#[derive(Deserialize)]
struct EngineSnapshot {
    frames: Vec<Frame>,
    #[serde(default)]
    config: ScoringConfig,
}

impl TryFrom<EngineSnapshot> for ScoringEngine {
    type Error = ScoringError;

    fn try_from(snapshot: EngineSnapshot) -> Result<Self, Self::Error> {
        if snapshot.frames.len() != FRAME_COUNT {
            return Err(ScoringError::FrameCount {
                found: snapshot.frames.len(),
            });
        }

        let mut engine = Self::with_config(snapshot.config);
        for (index, frame) in snapshot.frames.iter().enumerate() {
            for roll in frame.rolls() {
                match engine.record_roll(i32::from(roll.pins()))? {
                    RollOutcome::Recorded { frame, .. } if frame == index => {}
                    _ => return Err(ScoringError::MisplacedRoll { frame: index }),
                }
            }
        }
        Ok(engine)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringEngine {
    /// Create an empty engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ScoringConfig::default())
    }

    /// Create an empty engine.
    #[must_use]
    pub fn with_config(config: ScoringConfig) -> Self {
        Self {
            frames: vec![Frame::new(); FRAME_COUNT],
            current_frame: 0,
            config,
        }
    }

    /// Record the pins knocked down on the next delivery.
    ///
    /// Rejected rolls leave the engine untouched. Rolls after the tenth frame
    /// has closed are accepted and ignored.
    pub fn record_roll(&mut self, pins: i32) -> Result<RollOutcome, ScoringError> {
        let roll = Roll::new(pins).inspect_err(|err| {
            tracing::debug!(pins, %err, "rejected roll");
        })?;

        if self.is_complete() {
            tracing::debug!(pins, "game complete, ignoring roll");
            return Ok(RollOutcome::Ignored);
        }

        let index = self.current_frame;
        let is_final = index == FINAL_FRAME;
        let rule = self.config.tenth_frame;

        let standing = pins_standing(self.frames[index].rolls(), is_final, rule);
        if roll.pins() > standing {
            let err = ScoringError::PinsExceedStanding {
                frame: index,
                pins: roll.pins(),
                standing,
            };
            tracing::debug!(%err, "rejected roll");
            return Err(err);
        }

        let frame = &mut self.frames[index];
        frame.push(roll);
        tracing::trace!(frame = index, pins = roll.pins(), "roll recorded");

        let frame_complete = closes_frame(frame.rolls(), is_final, rule);
        if frame_complete {
            tracing::debug!(
                frame = index,
                kind = ?frame.kind(),
                pins = frame.pin_total(),
                "frame closed"
            );
            self.current_frame += 1;
        }

        Ok(RollOutcome::Recorded {
            frame: index,
            frame_complete,
        })
    }

    /// Total score over all ten frames, including strike and spare bonuses.
    ///
    /// Callable at any time; unfinished frames count their raw pins and
    /// missing bonus rolls count as zero.
    #[must_use]
    pub fn calculate_score(&self) -> u32 {
        lookahead::total_score(&self.frames, self.config.tenth_frame)
    }

    /// Score contributed by each frame.
    #[must_use]
    pub fn frame_scores(&self) -> Vec<u32> {
        (0..FRAME_COUNT)
            .map(|i| lookahead::frame_score(&self.frames, i, self.config.tenth_frame))
            .collect()
    }

    /// Cumulative score after each frame, as shown on a scoreboard.
    #[must_use]
    pub fn running_totals(&self) -> Vec<u32> {
        lookahead::running_totals(&self.frames, self.config.tenth_frame)
    }

    /// All ten frames.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// A single frame by 0-based index.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Index of the frame taking rolls; `FRAME_COUNT` once complete.
    #[must_use]
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Check if every frame is closed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_frame >= FRAME_COUNT
    }

    /// Pins standing for the next delivery, or `None` once complete.
    #[must_use]
    pub fn pins_standing(&self) -> Option<u8> {
        let frame = self.frames.get(self.current_frame)?;
        Some(pins_standing(
            frame.rolls(),
            self.current_frame == FINAL_FRAME,
            self.config.tenth_frame,
        ))
    }

    /// Number of rolls recorded.
    #[must_use]
    pub fn roll_count(&self) -> usize {
        self.frames.iter().map(Frame::len).sum()
    }

    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}
