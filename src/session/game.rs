//! Multi-bowler session: one engine per bowler plus a roll history.
//!
//! The session does not enforce turn order; the caller decides who bowls
//! next. It only routes rolls to the right engine and reports results.
//!
//! ```
//! use bowling_score::core::{PlayerId, ScoringConfig};
//! use bowling_score::session::{GameResult, GameSession};
//!
//! let mut session = GameSession::two_player("Ana", "Ben", ScoringConfig::default());
//! let (ana, ben) = (PlayerId::new(0), PlayerId::new(1));
//!
//! for _ in 0..10 {
//!     session.record_roll(ana, 10).unwrap();
//!     session.record_roll(ben, 4).unwrap();
//!     session.record_roll(ben, 5).unwrap();
//! }
//!
//! assert_eq!(session.score(ana), 270);
//! assert_eq!(session.score(ben), 90);
//! assert_eq!(session.result(), Some(GameResult::Winner(ana)));
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::result::GameResult;
use crate::core::{PlayerId, PlayerMap, Roll, ScoringConfig};
use crate::error::ScoringError;
use crate::scoring::{RollOutcome, ScoringEngine};

/// One accepted roll in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// Who bowled.
    pub player: PlayerId,
    /// 0-based frame the roll landed in.
    pub frame: usize,
    /// Pins knocked down.
    pub roll: Roll,
}

/// Bowlers, their engines and the session's roll history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    config: ScoringConfig,
    names: PlayerMap<String>,
    engines: PlayerMap<ScoringEngine>,
    history: Vector<RollRecord>,
}

impl GameSession {
    /// Create a session with one fresh engine per name.
    ///
    /// Panics if `names` is empty.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>, config: ScoringConfig) -> Self {
        let names = PlayerMap::from_values(names.into_iter().map(Into::into).collect());
        let engines = PlayerMap::new(names.player_count(), |_| ScoringEngine::with_config(config));

        tracing::debug!(players = names.player_count(), ?config, "session started");

        Self {
            config,
            names,
            engines,
            history: Vector::new(),
        }
    }

    /// Create a two-bowler session.
    pub fn two_player(first: impl Into<String>, second: impl Into<String>, config: ScoringConfig) -> Self {
        Self::new([first.into(), second.into()], config)
    }

    /// A new session with the same bowlers and configuration.
    ///
    /// Engines are newly constructed; nothing carries over.
    #[must_use]
    pub fn rematch(&self) -> Self {
        Self::new(
            self.names.iter().map(|(_, name)| name.clone()),
            self.config,
        )
    }

    /// Record a roll for `player`.
    ///
    /// Accepted rolls are appended to the history; ignored and rejected rolls
    /// are not.
    pub fn record_roll(&mut self, player: PlayerId, pins: i32) -> Result<RollOutcome, ScoringError> {
        let roll = Roll::new(pins)?;
        let outcome = self.engines[player].record_roll(i32::from(roll))?;

        if let RollOutcome::Recorded { frame, .. } = outcome {
            self.history.push_back(RollRecord { player, frame, roll });
        }

        Ok(outcome)
    }

    /// Current score for `player`.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.engines[player].calculate_score()
    }

    /// Current score for every bowler.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        self.engines.map(|_, engine| engine.calculate_score())
    }

    /// Check if every bowler has finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.engines.iter().all(|(_, engine)| engine.is_complete())
    }

    /// Final result, or `None` while any bowler is still playing.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_complete() {
            return None;
        }

        let result = GameResult::from_scores(&self.scores());
        tracing::debug!(?result, "session complete");
        Some(result)
    }

    #[must_use]
    pub fn name(&self, player: PlayerId) -> &str {
        &self.names[player]
    }

    #[must_use]
    pub fn engine(&self, player: PlayerId) -> &ScoringEngine {
        &self.engines[player]
    }

    /// Accepted rolls in the order they were recorded.
    #[must_use]
    pub fn history(&self) -> &Vector<RollRecord> {
        &self.history
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.names.player_count()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        self.names.player_ids()
    }

    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}
