//! A single delivery and its pin count.
//!
//! `Roll` can only be built through validation, so every `Roll` in a frame is
//! known to be in `0..=10`.
//!
//! ```
//! use bowling_score::core::Roll;
//!
//! let roll = Roll::new(7).unwrap();
//! assert_eq!(roll.pins(), 7);
//! assert!(!roll.is_strike());
//!
//! assert!(Roll::new(11).is_err());
//! assert!(Roll::new(-1).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// Pins racked at the start of a frame.
pub const PIN_COUNT: u8 = 10;

/// Pins knocked down on one delivery, always in `0..=10`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Roll(u8);

impl Roll {
    /// A gutter ball.
    pub const GUTTER: Roll = Roll(0);

    /// All ten pins.
    pub const STRIKE: Roll = Roll(PIN_COUNT);

    /// Validate a raw pin count.
    pub fn new(pins: i32) -> Result<Self, ScoringError> {
        match u8::try_from(pins) {
            Ok(p) if p <= PIN_COUNT => Ok(Self(p)),
            _ => Err(ScoringError::InvalidRoll { pins }),
        }
    }

    /// Pins knocked down.
    #[must_use]
    pub const fn pins(self) -> u8 {
        self.0
    }

    /// Pins knocked down, widened for score arithmetic.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0 as u32
    }

    /// Whether all ten pins fell.
    #[must_use]
    pub const fn is_strike(self) -> bool {
        self.0 == PIN_COUNT
    }
}

impl TryFrom<i32> for Roll {
    type Error = ScoringError;

    fn try_from(pins: i32) -> Result<Self, Self::Error> {
        Self::new(pins)
    }
}

impl From<Roll> for i32 {
    fn from(roll: Roll) -> Self {
        i32::from(roll.0)
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sum of a slice of rolls.
#[must_use]
pub fn pin_sum(rolls: &[Roll]) -> u32 {
    rolls.iter().map(|r| r.value()).sum()
}
