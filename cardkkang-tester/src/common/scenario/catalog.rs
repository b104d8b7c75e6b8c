use super::{TestScenario, counters, packs, smoke};

const SCENARIOS: &[TestScenario] = &[
    TestScenario::new(
        "smoke",
        "Smoke Test",
        "Open one pack and check size, luck range and counters",
        smoke::run,
    ),
    TestScenario::new(
        "rarity-distribution",
        "Rarity Distribution",
        "Raw weighted draws converge to the table weights",
        packs::rarity_distribution,
    ),
    TestScenario::new(
        "rare-floor",
        "Rare Floor",
        "Every non-empty pack meets the floor and only the last card is upgraded",
        packs::rare_floor,
    ),
    TestScenario::new(
        "luck-bounds",
        "Luck Bounds",
        "Luck matches the point sum, stays in 0..=100 and never drops on upgrade",
        packs::luck_bounds,
    ),
    TestScenario::new(
        "reel-spin",
        "Reel Spin",
        "Spins run 16 to 25 ticks of table codes, then stop",
        packs::reel_spin,
    ),
    TestScenario::new(
        "counter-lifecycle",
        "Counter Lifecycle",
        "Open, open, reset keeps the grand total and zeroes today",
        counters::lifecycle,
    ),
    TestScenario::new(
        "date-rollover",
        "Date Rollover",
        "A day change starts a new daily key while the total accumulates",
        counters::date_rollover,
    ),
    TestScenario::new(
        "theme-toggle",
        "Theme Toggle",
        "Theme starts light and each toggle persists the new value",
        counters::theme_toggle,
    ),
];

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.description)).collect()
}

#[must_use]
pub fn scenario_keys() -> Vec<&'static str> {
    SCENARIOS.iter().map(|s| s.key).collect()
}

#[must_use]
pub fn get_scenario(key: &str) -> Option<TestScenario> {
    let key = key.trim().to_ascii_lowercase();
    SCENARIOS.iter().find(|s| s.key == key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::scenario::ScenarioCtx;
    use cardkkang_game::{DEFAULT_PACK_SIZE, RarityFloor};

    #[test]
    fn keys_are_unique_and_resolvable() {
        let keys = scenario_keys();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), keys.len());
        for key in keys {
            assert_eq!(get_scenario(key).map(|s| s.key), Some(key));
        }
        assert!(get_scenario(" SMOKE ").is_some());
        assert!(get_scenario("vehicle-system").is_none());
    }

    #[test]
    fn every_scenario_passes_on_defaults() {
        for seed in [1_u64, 1337, 0xDEAD_BEEF] {
            let ctx = ScenarioCtx {
                seed,
                pack_size: DEFAULT_PACK_SIZE,
                floor: RarityFloor::default(),
                verbose: false,
            };
            for scenario in SCENARIOS {
                if let Err(err) = scenario.run(&ctx) {
                    panic!("{} failed for seed {seed}: {err:#}", scenario.key);
                }
            }
        }
    }

    #[test]
    fn scenarios_tolerate_empty_packs() {
        let ctx = ScenarioCtx {
            seed: 7,
            pack_size: 0,
            floor: RarityFloor::default(),
            verbose: false,
        };
        for scenario in SCENARIOS {
            if let Err(err) = scenario.run(&ctx) {
                panic!("{} failed on empty packs: {err:#}", scenario.key);
            }
        }
    }
}
