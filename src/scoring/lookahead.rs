//! Bonus lookahead over a frame sequence.
//!
//! All functions take the full frame slice and a frame index and never fail.
//! Rolls that have not been bowled yet count as zero because they are simply
//! absent from the scan.
//!
//! ## Rules
//!
//! - Strike: 10 plus the next two rolls, scanning forward through later
//!   frames in roll order.
//! - Spare: 10 plus the first roll of the next frame. The tenth frame has no
//!   next frame, so a tenth-frame spare scores 10 under the closing rule.
//! - Open: the raw sum.
//! - Regulation tenth frame: the raw sum, since its bonus deliveries are
//!   recorded inside the frame.

use crate::core::{Frame, FrameKind, Roll, TenthFrame, FINAL_FRAME, PIN_COUNT};

/// Rolls bowled after frame `index`, in delivery order.
pub fn rolls_after(frames: &[Frame], index: usize) -> impl Iterator<Item = Roll> + '_ {
    frames
        .iter()
        .skip(index.saturating_add(1))
        .flat_map(|frame| frame.rolls().iter().copied())
}

/// Bonus for a strike in frame `index`: the sum of up to two following rolls.
#[must_use]
pub fn strike_bonus(frames: &[Frame], index: usize) -> u32 {
    rolls_after(frames, index).take(2).map(Roll::value).sum()
}

/// Bonus for a spare in frame `index`: the first roll of the next frame.
///
/// Zero when `index` is the last frame or the next frame is still empty.
#[must_use]
pub fn spare_bonus(frames: &[Frame], index: usize) -> u32 {
    frames
        .get(index.saturating_add(1))
        .and_then(Frame::first)
        .map_or(0, Roll::value)
}

/// Score contributed by frame `index`, including any bonus.
///
/// Out-of-range indices contribute nothing.
#[must_use]
pub fn frame_score(frames: &[Frame], index: usize, rule: TenthFrame) -> u32 {
    let Some(frame) = frames.get(index) else {
        return 0;
    };

    if index == FINAL_FRAME && rule == TenthFrame::Regulation {
        return frame.pin_total();
    }

    match frame.kind() {
        FrameKind::Spare => u32::from(PIN_COUNT) + spare_bonus(frames, index),
        FrameKind::Strike => u32::from(PIN_COUNT) + strike_bonus(frames, index),
        FrameKind::Open => frame.pin_total(),
    }
}

/// Total score over every frame.
#[must_use]
pub fn total_score(frames: &[Frame], rule: TenthFrame) -> u32 {
    (0..frames.len()).map(|i| frame_score(frames, i, rule)).sum()
}

/// Cumulative score after each frame, one entry per frame.
///
/// The last entry equals `total_score`.
#[must_use]
pub fn running_totals(frames: &[Frame], rule: TenthFrame) -> Vec<u32> {
    (0..frames.len())
        .scan(0u32, |acc, i| {
            *acc += frame_score(frames, i, rule);
            Some(*acc)
        })
        .collect()
}
