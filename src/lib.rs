//! # bowling-score
//!
//! Ten-pin bowling scoring for a two-player game.
//!
//! ## Design
//!
//! 1. **Engine per bowler**: `ScoringEngine` owns ten frames and a cursor.
//!    Rolls are validated before any state changes.
//!
//! 2. **Pure lookahead**: strike and spare bonuses are computed by free
//!    functions over a frame slice (`scoring::lookahead`), so they can be
//!    tested against hand-built frames.
//!
//! 3. **Reset by construction**: a new game is a new engine or a
//!    `GameSession::rematch`. Nothing is reset in place.
//!
//! ## Tenth frame
//!
//! `TenthFrame::Closing` (the default) closes the tenth frame like any other,
//! so ten strikes score 270. `TenthFrame::Regulation` grants the bonus
//! deliveries and a perfect game scores 300.
//!
//! ## Modules
//!
//! - `core`: rolls, frames, bowler IDs, configuration
//! - `scoring`: the engine and the lookahead functions
//! - `session`: per-bowler engines, roll history, results
//! - `sim`: seeded random bowlers
//! - `error`: `ScoringError`

pub mod core;
pub mod error;
pub mod scoring;
pub mod session;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Frame, FrameKind, PlayerId, PlayerMap, Roll, ScoringConfig, TenthFrame, FRAME_COUNT, PIN_COUNT,
};

pub use crate::error::ScoringError;

pub use crate::scoring::{RollOutcome, ScoringEngine};

pub use crate::session::{GameResult, GameSession, RollRecord};

pub use crate::sim::{simulate_game, GameRng, RandomBowler};
