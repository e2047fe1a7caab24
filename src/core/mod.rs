//! Core types: rolls, frames, bowlers, configuration.
//!
//! Everything here is plain data plus the pure frame-completion rules. The
//! scoring algorithm lives in `scoring`.

pub mod config;
pub mod frame;
pub mod player;
pub mod roll;

pub use config::{ScoringConfig, TenthFrame, FINAL_FRAME, FRAME_COUNT};
pub use frame::{closes_frame, pins_standing, Frame, FrameKind};
pub use player::{PlayerId, PlayerMap};
pub use roll::{pin_sum, Roll, PIN_COUNT};
