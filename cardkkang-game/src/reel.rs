//! Slot-style reel spin. Purely cosmetic: frames are uniform over the table
//! and never feed back into pack generation.

use crate::constants::{REEL_COUNT, REEL_EXTRA_TICKS, REEL_MIN_TICKS};
use crate::numbers::{unit_to_index, unit_to_span};
use crate::random::UniformSource;
use crate::rarity::{RarityCode, RarityTier};

/// Codes shown on the reels for one tick.
pub type ReelFrame = [RarityCode; REEL_COUNT];

/// Self-terminating spin with a randomized tick budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReelSpin {
    step: u32,
    max_ticks: u32,
}

impl ReelSpin {
    /// Start a spin of `16 + floor(u * 10)` ticks.
    pub fn start<S: UniformSource + ?Sized>(source: &mut S) -> Self {
        let extra = unit_to_span(source.next_unit(), REEL_EXTRA_TICKS);
        Self {
            step: 0,
            max_ticks: REEL_MIN_TICKS + extra,
        }
    }

    #[must_use]
    pub const fn max_ticks(&self) -> u32 {
        self.max_ticks
    }

    #[must_use]
    pub const fn step(&self) -> u32 {
        self.step
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.step >= self.max_ticks
    }

    /// Next frame, or `None` once the budget is spent.
    ///
    /// # Panics
    ///
    /// Panics if `tiers` is empty.
    pub fn tick<S: UniformSource + ?Sized>(
        &mut self,
        tiers: &[RarityTier],
        source: &mut S,
    ) -> Option<ReelFrame> {
        if self.is_finished() {
            return None;
        }
        self.step += 1;
        let mut frame = [RarityCode::C; REEL_COUNT];
        for slot in &mut frame {
            *slot = tiers[unit_to_index(source.next_unit(), tiers.len())].code;
        }
        Some(frame)
    }
}
