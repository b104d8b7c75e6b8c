//! Cardkkang Game Engine
//!
//! Platform-agnostic core logic for the Cardkkang card-pack toy: the rarity
//! table, weighted pack generation with a rarity floor, the luck score, and
//! counter bookkeeping over an injected key-value backend.
//! This crate has no UI or platform-specific dependencies.

pub mod clock;
pub mod constants;
pub mod counters;
pub mod luck;
pub mod names;
pub mod numbers;
pub mod pack;
pub mod random;
pub mod rarity;
pub mod reel;
pub mod storage;
pub mod theme;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, LocalClock};
pub use constants::DEFAULT_PACK_SIZE;
pub use counters::{CounterSnapshot, CounterStore, MilestoneProgress};
pub use luck::{clamp_percent, luck_score};
pub use names::CARD_NAMES;
pub use pack::{
    Card, Pack, RarityFloor, draw_pack, expected_shares, observed_shares, open_pack,
    open_pack_with_floor, pick_weighted,
};
pub use random::{FnSource, ScriptedSource, SeededSource, UniformSource};
pub use rarity::{
    ParseRarityError, RARITY_TABLE, RarityCode, RarityTier, TierTableError, tier, validate_tiers,
};
pub use reel::{ReelFrame, ReelSpin};
pub use storage::{KeyValueStore, MemoryStore, StorageKeys};
pub use theme::{Theme, ThemePreference};

use serde::Serialize;

/// Everything one user-triggered opening produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackOpening {
    pub pack: Pack,
    pub luck: u8,
    pub counters: CounterSnapshot,
}

/// Composes pack generation with counter bookkeeping, the way the
/// presentation layer's open-pack handler does.
#[derive(Debug, Clone)]
pub struct PackEngine<S, C = LocalClock> {
    counters: CounterStore<S, C>,
    names: &'static [&'static str],
    tiers: &'static [RarityTier],
    pack_size: usize,
    floor: RarityFloor,
}

impl<S: KeyValueStore> PackEngine<S, LocalClock> {
    /// Engine over `store` with the shipped table, names, keys and local clock.
    pub fn with_store(store: S) -> Self {
        Self::new(CounterStore::with_local_clock(store))
    }
}

impl<S, C> PackEngine<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Create an engine with the shipped table and names around `counters`.
    pub fn new(counters: CounterStore<S, C>) -> Self {
        Self {
            counters,
            names: &CARD_NAMES,
            tiers: &RARITY_TABLE,
            pack_size: DEFAULT_PACK_SIZE,
            floor: RarityFloor::default(),
        }
    }

    #[must_use]
    pub fn with_pack_size(mut self, pack_size: usize) -> Self {
        self.pack_size = pack_size;
        self
    }

    #[must_use]
    pub fn with_floor(mut self, floor: RarityFloor) -> Self {
        self.floor = floor;
        self
    }

    /// Swap the drop table and name list. The floor is re-resolved against
    /// `tiers` so upgrades stay inside the new table.
    ///
    /// # Panics
    ///
    /// Panics if either list is empty.
    #[must_use]
    pub fn with_catalog(
        mut self,
        tiers: &'static [RarityTier],
        names: &'static [&'static str],
    ) -> Self {
        assert!(!tiers.is_empty(), "tier table must not be empty");
        assert!(!names.is_empty(), "card name list must not be empty");
        self.floor = RarityFloor::at_in(tiers, self.floor.minimum());
        self.tiers = tiers;
        self.names = names;
        self
    }

    pub const fn pack_size(&self) -> usize {
        self.pack_size
    }

    pub const fn floor(&self) -> &RarityFloor {
        &self.floor
    }

    pub const fn tiers(&self) -> &'static [RarityTier] {
        self.tiers
    }

    pub const fn counter_store(&self) -> &CounterStore<S, C> {
        &self.counters
    }

    /// Open a pack, score it, and add its cards to the counters.
    pub fn open<R: UniformSource + ?Sized>(&self, source: &mut R) -> PackOpening {
        let pack = open_pack_with_floor(
            self.pack_size,
            self.names,
            self.tiers,
            &self.floor,
            source,
        );
        let luck = luck_score(pack.cards());
        let counters = self
            .counters
            .add_cards(u64::try_from(pack.len()).unwrap_or(u64::MAX));
        log::debug!(
            "opened pack of {} (best {:?}, luck {luck}, floor {:?}) -> today {} total {}",
            pack.len(),
            pack.best(),
            pack.floor_upgrade(),
            counters.daily_total,
            counters.grand_total
        );
        PackOpening {
            pack,
            luck,
            counters,
        }
    }

    pub fn reset_daily(&self) -> CounterSnapshot {
        self.counters.reset_daily()
    }

    pub fn counters(&self) -> CounterSnapshot {
        self.counters.snapshot()
    }
}
