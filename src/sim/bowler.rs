//! Random bowler that only produces legal rolls.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use crate::core::{ScoringConfig, PIN_COUNT};
use crate::error::ScoringError;
use crate::scoring::ScoringEngine;

/// Picks pin counts for a simulated bowler.
///
/// With a full rack, the bowler strikes with probability `strike_rate`;
/// otherwise the pin count is uniform over the pins standing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomBowler {
    /// Probability of a strike on a full rack, in `0.0..=1.0`.
    pub strike_rate: f64,
}

impl Default for RandomBowler {
    fn default() -> Self {
        Self { strike_rate: 0.2 }
    }
}

impl RandomBowler {
    /// Bowler that strikes on a full rack with the given probability.
    #[must_use]
    pub fn with_strike_rate(strike_rate: f64) -> Self {
        Self { strike_rate }
    }

    /// Next pin count given `standing` pins.
    pub fn next_roll(&self, rng: &mut GameRng, standing: u8) -> u8 {
        if standing == PIN_COUNT && rng.gen_bool(self.strike_rate) {
            return PIN_COUNT;
        }
        rng.gen_pins(standing)
    }

    /// Bowl until `engine` is complete.
    pub fn finish(&self, engine: &mut ScoringEngine, rng: &mut GameRng) -> Result<(), ScoringError> {
        while let Some(standing) = engine.pins_standing() {
            let pins = self.next_roll(rng, standing);
            engine.record_roll(i32::from(pins))?;
        }
        Ok(())
    }
}

/// Play a full random game for one bowler.
///
/// Deterministic per `seed`.
pub fn simulate_game(seed: u64, config: ScoringConfig) -> Result<ScoringEngine, ScoringError> {
    let mut engine = ScoringEngine::with_config(config);
    let mut rng = GameRng::new(seed);
    RandomBowler::default().finish(&mut engine, &mut rng)?;

    tracing::debug!(seed, score = engine.calculate_score(), "simulated game");
    Ok(engine)
}
