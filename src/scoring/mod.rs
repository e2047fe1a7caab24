//! Scoring: the per-bowler engine and the bonus lookahead functions it uses.

pub mod engine;
pub mod lookahead;

pub use engine::{RollOutcome, ScoringEngine};
pub use lookahead::{frame_score, rolls_after, running_totals, spare_bonus, strike_bonus, total_score};
