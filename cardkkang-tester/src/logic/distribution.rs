//! Aggregate rarity statistics over seeded pack openings.

use cardkkang_game::numbers::ratio;
use cardkkang_game::random::PACK_STREAM;
use cardkkang_game::{
    CARD_NAMES, RARITY_TABLE, RarityCode, RarityFloor, SeededSource, expected_shares, luck_score,
    open_pack_with_floor,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Packs opened per seed for every requested iteration.
pub const PACKS_PER_ITERATION: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierShare {
    pub code: RarityCode,
    pub name: &'static str,
    pub count: usize,
    pub expected: f64,
    pub observed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSummary {
    pub seeds: usize,
    pub packs: usize,
    pub cards: usize,
    pub pack_size: usize,
    pub floor: RarityCode,
    pub floor_upgrades: usize,
    pub mean_luck: f64,
    pub tiers: Vec<TierShare>,
}

impl DistributionSummary {
    /// Share of packs that needed the floor upgrade.
    #[must_use]
    pub fn floor_upgrade_rate(&self) -> f64 {
        ratio(self.floor_upgrades, self.packs)
    }
}

/// Open `iterations * PACKS_PER_ITERATION` packs per seed on the pack stream and
/// tally what players would see, floor upgrades included.
#[must_use]
pub fn summarize_distribution(
    seeds: &[u64],
    iterations: usize,
    pack_size: usize,
    floor: &RarityFloor,
) -> DistributionSummary {
    let packs_per_seed = iterations.max(1).saturating_mul(PACKS_PER_ITERATION);
    let mut counts: BTreeMap<RarityCode, usize> = BTreeMap::new();
    let mut packs = 0_usize;
    let mut cards = 0_usize;
    let mut floor_upgrades = 0_usize;
    let mut luck_total = 0_usize;

    for &seed in seeds {
        let mut source = SeededSource::for_stream(seed, PACK_STREAM);
        for _ in 0..packs_per_seed {
            let pack =
                open_pack_with_floor(pack_size, &CARD_NAMES, &RARITY_TABLE, floor, &mut source);
            packs += 1;
            if pack.floor_upgrade().is_some() {
                floor_upgrades += 1;
            }
            luck_total += usize::from(luck_score(pack.cards()));
            for card in &pack {
                cards += 1;
                *counts.entry(card.code()).or_default() += 1;
            }
        }
    }

    let tiers = expected_shares(&RARITY_TABLE)
        .into_iter()
        .zip(RARITY_TABLE.iter())
        .map(|((code, expected), tier)| {
            let count = counts.get(&code).copied().unwrap_or(0);
            TierShare {
                code,
                name: tier.name,
                count,
                expected,
                observed: ratio(count, cards),
            }
        })
        .collect();

    log::debug!("distribution over {packs} packs: {floor_upgrades} floor upgrades");
    DistributionSummary {
        seeds: seeds.len(),
        packs,
        cards,
        pack_size,
        floor: floor.minimum(),
        floor_upgrades,
        mean_luck: ratio(luck_total, packs),
        tiers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_card_once() {
        let summary = summarize_distribution(&[1, 2], 1, 10, &RarityFloor::default());
        assert_eq!(summary.seeds, 2);
        assert_eq!(summary.packs, 200);
        assert_eq!(summary.cards, 2_000);
        assert_eq!(summary.tiers.iter().map(|t| t.count).sum::<usize>(), 2_000);
        let share_total: f64 = summary.tiers.iter().map(|t| t.observed).sum();
        assert!((share_total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn floor_shifts_commons_into_rares() {
        let summary = summarize_distribution(&[42], 5, 10, &RarityFloor::default());
        let rare = summary
            .tiers
            .iter()
            .find(|t| t.code == RarityCode::R)
            .unwrap();
        assert!(rare.observed > rare.expected);
        assert!(summary.floor_upgrades > 0);
        assert!(summary.floor_upgrade_rate() < 0.5);
        assert!(summary.mean_luck >= 15.0);
    }

    #[test]
    fn empty_packs_produce_zero_shares() {
        let summary = summarize_distribution(&[9], 1, 0, &RarityFloor::default());
        assert_eq!(summary.cards, 0);
        assert!(summary.tiers.iter().all(|t| t.observed == 0.0));
        assert_eq!(summary.floor_upgrades, 0);
        assert!(summary.mean_luck.abs() < f64::EPSILON);
    }
}
