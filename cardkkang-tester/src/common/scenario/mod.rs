use anyhow::Result;
use cardkkang_game::random::{PACK_STREAM, REEL_STREAM};
use cardkkang_game::{
    CounterStore, FixedClock, MemoryStore, PackEngine, RarityFloor, SeededSource, StorageKeys,
};

use crate::common::util::date_for_seed;

pub mod catalog;
pub mod counters;
pub mod packs;
pub mod smoke;

pub use catalog::{get_scenario, list_scenarios};

/// Inputs shared by every iteration of a scenario run.
#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub seed: u64,
    pub pack_size: usize,
    pub floor: RarityFloor,
    pub verbose: bool,
}

/// Engine over a fresh in-memory backend, with handles to its storage and clock.
pub struct Harness {
    pub engine: PackEngine<MemoryStore, FixedClock>,
    pub backend: MemoryStore,
    pub clock: FixedClock,
}

impl ScenarioCtx {
    #[must_use]
    pub fn harness(&self) -> Harness {
        let backend = MemoryStore::new();
        let clock = FixedClock::new(date_for_seed(self.seed));
        let counters = CounterStore::new(backend.clone(), StorageKeys::default(), clock.clone());
        let engine = PackEngine::new(counters)
            .with_pack_size(self.pack_size)
            .with_floor(self.floor);
        Harness {
            engine,
            backend,
            clock,
        }
    }

    #[must_use]
    pub fn pack_source(&self) -> SeededSource {
        SeededSource::for_stream(self.seed, PACK_STREAM)
    }

    #[must_use]
    pub fn reel_source(&self) -> SeededSource {
        SeededSource::for_stream(self.seed, REEL_STREAM)
    }
}

pub type ScenarioCheck = fn(&ScenarioCtx) -> Result<()>;

// Logic test scenario
#[derive(Debug, Clone, Copy)]
pub struct TestScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    check: ScenarioCheck,
}

impl TestScenario {
    #[must_use]
    pub const fn new(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        check: ScenarioCheck,
    ) -> Self {
        Self {
            key,
            name,
            description,
            check,
        }
    }

    /// Run one iteration.
    ///
    /// # Errors
    /// Returns the first violated expectation.
    pub fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        (self.check)(ctx)
    }
}
