//! Sessions: several bowlers scored side by side.
//!
//! Each bowler gets an independent `ScoringEngine`; a new game is a new
//! session built with `GameSession::rematch`.

pub mod game;
pub mod result;

pub use game::{GameSession, RollRecord};
pub use result::GameResult;
