//! Cosmetic luck score for a pack.

use crate::constants::{LUCK_CAP, LUCK_MULTIPLIER};
use crate::pack::Card;

/// Score in `0..=100`: per-card points (UR=10, SR=6, R=3, U=1, C=0), times 5,
/// capped at 100.
#[must_use]
pub fn luck_score(cards: &[Card]) -> u8 {
    let points: u32 = cards
        .iter()
        .map(|card| card.code().luck_points())
        .fold(0_u32, u32::saturating_add);
    let scaled = points.saturating_mul(LUCK_MULTIPLIER);
    u8::try_from(scaled.min(u32::from(LUCK_CAP))).unwrap_or(LUCK_CAP)
}

/// Clamp an arbitrary bar value into a `0..=100` percentage.
#[must_use]
pub fn clamp_percent(value: i64) -> u8 {
    u8::try_from(value.clamp(0, 100)).unwrap_or(0)
}
