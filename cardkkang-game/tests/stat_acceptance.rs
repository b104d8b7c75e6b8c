use cardkkang_game::{
    CARD_NAMES, FnSource, RARITY_TABLE, RarityCode, SeededSource, draw_pack, expected_shares,
    observed_shares, pick_weighted,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::convert::TryFrom;

const SAMPLE_SIZE: usize = 20_000;
const TOLERANCE: f64 = 0.015;

#[test]
fn weighted_selection_tracks_table_weights() {
    let mut rng = SmallRng::seed_from_u64(0xACED);
    let mut source = FnSource(|| rng.r#gen::<f64>());

    let mut counts: HashMap<RarityCode, u32> = HashMap::new();
    for _ in 0..SAMPLE_SIZE {
        *counts
            .entry(pick_weighted(&RARITY_TABLE, &mut source).code)
            .or_default() += 1;
    }

    let total = f64::from(u32::try_from(SAMPLE_SIZE).expect("sample size fits"));
    for (code, expected) in expected_shares(&RARITY_TABLE) {
        let observed = f64::from(counts.get(&code).copied().unwrap_or(0)) / total;
        assert!(
            (observed - expected).abs() <= TOLERANCE,
            "{code} drifted: observed {observed:.4}, expected {expected:.4}"
        );
    }
}

#[test]
fn raw_pack_draws_match_weights_before_the_floor() {
    let mut source = SeededSource::from_seed(0x00C0_FFEE);
    let mut cards = Vec::with_capacity(SAMPLE_SIZE);
    while cards.len() < SAMPLE_SIZE {
        cards.extend(draw_pack(10, &CARD_NAMES, &RARITY_TABLE, &mut source).into_cards());
    }

    let expected = expected_shares(&RARITY_TABLE);
    let observed = observed_shares(&RARITY_TABLE, &cards);
    for ((code, want), (_, got)) in expected.iter().zip(observed.iter()) {
        assert!(
            (got - want).abs() <= TOLERANCE,
            "{code} drifted: observed {got:.4}, expected {want:.4}"
        );
    }
}

#[test]
fn names_are_drawn_roughly_uniformly() {
    let mut source = SeededSource::from_seed(99);
    let mut counts: HashMap<String, u32> = HashMap::new();
    let packs = SAMPLE_SIZE / 10;
    for _ in 0..packs {
        for card in draw_pack(10, &CARD_NAMES, &RARITY_TABLE, &mut source).into_cards() {
            *counts.entry(card.name).or_default() += 1;
        }
    }

    assert_eq!(counts.len(), CARD_NAMES.len());
    let expected = 1.0 / f64::from(u32::try_from(CARD_NAMES.len()).expect("fits"));
    let total = f64::from(u32::try_from(SAMPLE_SIZE).expect("fits"));
    for (name, count) in counts {
        let share = f64::from(count) / total;
        assert!(
            (share - expected).abs() <= TOLERANCE,
            "{name} drifted: {share:.4}"
        );
    }
}
