//! Simulated bowlers for tests and benchmarks.
//!
//! - `GameRng`: seeded, forkable ChaCha8 RNG
//! - `RandomBowler`: legal pin counts given the pins standing
//! - `simulate_game`: a complete random game for one engine

pub mod bowler;
pub mod rng;

pub use bowler::{simulate_game, RandomBowler};
pub use rng::GameRng;
