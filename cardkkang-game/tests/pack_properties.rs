use cardkkang_game::{
    CARD_NAMES, Pack, RARITY_TABLE, RarityCode, ScriptedSource, SeededSource, luck_score,
    open_pack, tier,
};

#[test]
fn every_non_empty_pack_has_a_rare_or_better() {
    for seed in 0..64_u64 {
        let mut source = SeededSource::from_seed(seed);
        for size in 1..=12 {
            let pack = open_pack(size, &CARD_NAMES, &RARITY_TABLE, &mut source);
            assert_eq!(pack.len(), size, "seed {seed} size {size}");
            assert!(
                pack.iter().any(|c| c.code().is_rare_or_better()),
                "seed {seed} size {size} had no rare"
            );
        }
    }
}

#[test]
fn empty_request_yields_empty_pack() {
    let mut source = SeededSource::from_seed(1);
    let pack = open_pack(0, &CARD_NAMES, &RARITY_TABLE, &mut source);
    assert_eq!(pack, Pack::default());
    assert_eq!(source.draws(), 0);
}

#[test]
fn pack_consumes_two_draws_per_card() {
    let mut source = SeededSource::from_seed(2024);
    let pack = open_pack(10, &CARD_NAMES, &RARITY_TABLE, &mut source);
    assert_eq!(source.draws(), 2 * u64::try_from(pack.len()).unwrap());
}

#[test]
fn same_seed_same_pack() {
    let a = open_pack(10, &CARD_NAMES, &RARITY_TABLE, &mut SeededSource::from_seed(77));
    let b = open_pack(10, &CARD_NAMES, &RARITY_TABLE, &mut SeededSource::from_seed(77));
    assert_eq!(a, b);
}

#[test]
fn floor_only_touches_the_tier_of_the_last_card() {
    // All commons, so the floor has to upgrade the last card.
    let script: Vec<f64> = (0..10)
        .flat_map(|i| [0.3, f64::from(i) * 0.1 + 0.1])
        .collect();
    let mut raw = ScriptedSource::new(script.clone());
    let drawn = cardkkang_game::draw_pack(10, &CARD_NAMES, &RARITY_TABLE, &mut raw);
    let mut floored = ScriptedSource::new(script);
    let opened = open_pack(10, &CARD_NAMES, &RARITY_TABLE, &mut floored);

    for (before, after) in drawn.iter().zip(opened.iter()) {
        assert_eq!(before.name, after.name);
    }
    assert_eq!(drawn.cards()[..9], opened.cards()[..9]);
    assert_eq!(opened.cards()[9].tier, *tier(RarityCode::R));
}

#[test]
fn luck_score_of_real_packs_stays_in_range() {
    let mut source = SeededSource::from_seed(31337);
    for _ in 0..500 {
        let pack = open_pack(10, &CARD_NAMES, &RARITY_TABLE, &mut source);
        let luck = luck_score(pack.cards());
        // The floor guarantees at least one rare: 3 points times 5.
        assert!((15..=100).contains(&luck), "luck {luck}");
    }
}
