use anyhow::{Result, ensure};
use cardkkang_game::{
    CARD_NAMES, FnSource, RARITY_TABLE, RarityCode, ReelSpin, clamp_percent, draw_pack,
    expected_shares, luck_score, open_pack_with_floor, pick_weighted, tier,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::collections::BTreeMap;

use super::ScenarioCtx;

const DISTRIBUTION_DRAWS: u32 = 10_000;
const DISTRIBUTION_TOLERANCE: f64 = 0.03;
const PACKS_PER_ITERATION: usize = 200;
const SPINS_PER_ITERATION: usize = 50;

pub fn rarity_distribution(ctx: &ScenarioCtx) -> Result<()> {
    let mut rng = ChaCha20Rng::seed_from_u64(ctx.seed);
    let mut source = FnSource(|| rng.r#gen::<f64>());
    let mut counts: BTreeMap<RarityCode, u32> = BTreeMap::new();
    for _ in 0..DISTRIBUTION_DRAWS {
        *counts
            .entry(pick_weighted(&RARITY_TABLE, &mut source).code)
            .or_default() += 1;
    }

    for (code, expected) in expected_shares(&RARITY_TABLE) {
        let observed =
            f64::from(counts.get(&code).copied().unwrap_or(0)) / f64::from(DISTRIBUTION_DRAWS);
        ensure!(
            (observed - expected).abs() <= DISTRIBUTION_TOLERANCE,
            "{code} share {observed:.4} outside {expected:.4} ± {DISTRIBUTION_TOLERANCE}"
        );
    }
    Ok(())
}

pub fn rare_floor(ctx: &ScenarioCtx) -> Result<()> {
    let mut source = ctx.pack_source();
    for round in 0..PACKS_PER_ITERATION {
        let mut replay = source.clone();
        let raw = draw_pack(ctx.pack_size, &CARD_NAMES, &RARITY_TABLE, &mut replay);
        let pack = open_pack_with_floor(
            ctx.pack_size,
            &CARD_NAMES,
            &RARITY_TABLE,
            &ctx.floor,
            &mut source,
        );

        ensure!(
            pack.len() == ctx.pack_size,
            "pack {round} has {} cards",
            pack.len()
        );
        if pack.is_empty() {
            ensure!(pack.floor_upgrade().is_none(), "empty pack {round} upgraded");
            continue;
        }
        ensure!(
            ctx.floor.is_satisfied_by(pack.cards()),
            "pack {round} best {:?} below floor {}",
            pack.best(),
            ctx.floor.minimum()
        );

        let expected_upgrade =
            (!ctx.floor.is_satisfied_by(raw.cards())).then_some(ctx.pack_size - 1);
        ensure!(
            pack.floor_upgrade() == expected_upgrade,
            "pack {round} upgrade {:?}, expected {expected_upgrade:?}",
            pack.floor_upgrade()
        );
        for (idx, (before, after)) in raw.iter().zip(pack.iter()).enumerate() {
            ensure!(before.name == after.name, "pack {round} card {idx} renamed");
            if Some(idx) != expected_upgrade {
                ensure!(before == after, "pack {round} card {idx} changed");
            }
        }
    }
    Ok(())
}

pub fn luck_bounds(ctx: &ScenarioCtx) -> Result<()> {
    let mut source = ctx.pack_source();
    let floor_luck = clamp_percent(i64::from(ctx.floor.minimum().luck_points()) * 5);
    for round in 0..PACKS_PER_ITERATION {
        let pack = open_pack_with_floor(
            ctx.pack_size,
            &CARD_NAMES,
            &RARITY_TABLE,
            &ctx.floor,
            &mut source,
        );
        let luck = luck_score(pack.cards());
        let points: i64 = pack
            .iter()
            .map(|c| i64::from(c.code().luck_points()))
            .sum();

        ensure!(luck <= 100, "pack {round} luck {luck} above 100");
        ensure!(
            luck == clamp_percent(points * 5),
            "pack {round} luck {luck} does not match {points} points"
        );
        if !pack.is_empty() {
            ensure!(
                luck >= floor_luck,
                "pack {round} luck {luck} below floor luck {floor_luck}"
            );
        }

        // Upgrading any single card can never lower the score
        for idx in 0..pack.len() {
            let mut upgraded = pack.cards().to_vec();
            upgraded[idx].tier = *tier(RarityCode::UR);
            let raised = luck_score(&upgraded);
            ensure!(
                raised >= luck,
                "pack {round} luck fell from {luck} to {raised} upgrading card {idx}"
            );
        }
    }
    Ok(())
}

pub fn reel_spin(ctx: &ScenarioCtx) -> Result<()> {
    let mut source = ctx.reel_source();
    for round in 0..SPINS_PER_ITERATION {
        let mut spin = ReelSpin::start(&mut source);
        let budget = spin.max_ticks();
        ensure!(
            (16..=25).contains(&budget),
            "spin {round} budget {budget} outside 16..=25"
        );
        let mut frames = 0;
        while let Some(frame) = spin.tick(&RARITY_TABLE, &mut source) {
            frames += 1;
            ensure!(
                frame
                    .iter()
                    .all(|code| RARITY_TABLE.iter().any(|t| t.code == *code)),
                "spin {round} showed a code outside the table: {frame:?}"
            );
        }
        ensure!(
            frames == budget,
            "spin {round} emitted {frames} of {budget} frames"
        );
    }
    Ok(())
}
