//! Pack generation: weighted rarity selection, raw draws, and the rarity floor
//! post-pass.

use serde::Serialize;

use crate::numbers::{unit_to_index, usize_to_f64};
use crate::random::UniformSource;
use crate::rarity::{RarityCode, RarityTier, find_tier, tier};

/// A drawn card. Immutable once drawn except for a floor upgrade of its pack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub name: String,
    pub tier: RarityTier,
}

impl Card {
    #[must_use]
    pub fn new(name: impl Into<String>, tier: RarityTier) -> Self {
        Self {
            name: name.into(),
            tier,
        }
    }

    #[must_use]
    pub const fn code(&self) -> RarityCode {
        self.tier.code
    }
}

/// Ordered cards of one opening.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Pack {
    cards: Vec<Card>,
    floor_upgrade: Option<usize>,
}

impl Pack {
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            floor_upgrade: None,
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Index of the card the rarity floor upgraded, if it fired.
    #[must_use]
    pub const fn floor_upgrade(&self) -> Option<usize> {
        self.floor_upgrade
    }

    /// Highest rarity present, `None` for an empty pack.
    #[must_use]
    pub fn best(&self) -> Option<RarityCode> {
        self.cards.iter().map(Card::code).max()
    }

    #[must_use]
    pub fn count_of(&self, code: RarityCode) -> usize {
        self.cards.iter().filter(|c| c.code() == code).count()
    }
}

impl<'a> IntoIterator for &'a Pack {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Pick a tier with probability proportional to its weight.
///
/// Consumes exactly one draw. Tiers are walked in declared order, so earlier
/// entries win ties at a cumulative boundary. If floating-point rounding leaves
/// the scaled draw at or past the final cumulative weight, the first tier is
/// returned.
///
/// # Panics
///
/// Panics if `tiers` is empty.
pub fn pick_weighted<'t, S>(tiers: &'t [RarityTier], source: &mut S) -> &'t RarityTier
where
    S: UniformSource + ?Sized,
{
    let total: f64 = tiers.iter().map(|t| t.weight).sum();
    let roll = source.next_unit() * total;
    let mut acc = 0.0;
    for candidate in tiers {
        acc += candidate.weight;
        if roll < acc {
            return candidate;
        }
    }
    &tiers[0]
}

/// Draw `size` cards with no cross-card policy applied.
///
/// Each card takes two draws from `source`: rarity first, then name.
///
/// # Panics
///
/// Panics if `size > 0` and either `names` or `tiers` is empty.
pub fn draw_pack<S>(size: usize, names: &[&str], tiers: &[RarityTier], source: &mut S) -> Pack
where
    S: UniformSource + ?Sized,
{
    let mut cards = Vec::with_capacity(size);
    for _ in 0..size {
        let rarity = *pick_weighted(tiers, source);
        assert!(!names.is_empty(), "card name list must not be empty");
        let name = names[unit_to_index(source.next_unit(), names.len())];
        cards.push(Card::new(name, rarity));
    }
    Pack::from_cards(cards)
}

/// Minimum-quality guarantee applied after drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityFloor {
    minimum: RarityTier,
}

impl RarityFloor {
    #[must_use]
    pub const fn new(minimum: RarityTier) -> Self {
        Self { minimum }
    }

    /// Floor at `code` from the shipped table.
    #[must_use]
    pub fn at(code: RarityCode) -> Self {
        Self::new(*tier(code))
    }

    /// Floor at `code` resolved from `tiers`, falling back to the shipped table.
    #[must_use]
    pub fn at_in(tiers: &[RarityTier], code: RarityCode) -> Self {
        find_tier(tiers, code).map_or_else(|| Self::at(code), |t| Self::new(*t))
    }

    #[must_use]
    pub const fn minimum(&self) -> RarityCode {
        self.minimum.code
    }

    #[must_use]
    pub fn is_satisfied_by(&self, cards: &[Card]) -> bool {
        cards.iter().any(|c| c.code() >= self.minimum.code)
    }

    /// Upgrade the last card to the floor tier when nothing reached it.
    ///
    /// Returns the upgraded index. Empty packs are left untouched.
    pub fn apply(&self, pack: &mut Pack) -> Option<usize> {
        if self.is_satisfied_by(&pack.cards) {
            return None;
        }
        let last = pack.cards.len().checked_sub(1)?;
        pack.cards[last].tier = self.minimum;
        pack.floor_upgrade = Some(last);
        log::debug!(
            "rarity floor upgraded card {last} of {} to {}",
            pack.cards.len(),
            self.minimum.code
        );
        Some(last)
    }
}

impl Default for RarityFloor {
    fn default() -> Self {
        Self::at(RarityCode::R)
    }
}

/// Draw a pack and guarantee at least one rare-or-better card.
///
/// # Panics
///
/// Panics if `size > 0` and either `names` or `tiers` is empty.
pub fn open_pack<S>(size: usize, names: &[&str], tiers: &[RarityTier], source: &mut S) -> Pack
where
    S: UniformSource + ?Sized,
{
    let floor = RarityFloor::at_in(tiers, RarityCode::R);
    open_pack_with_floor(size, names, tiers, &floor, source)
}

/// Draw a pack and apply an explicit floor policy.
///
/// # Panics
///
/// Panics if `size > 0` and either `names` or `tiers` is empty.
pub fn open_pack_with_floor<S>(
    size: usize,
    names: &[&str],
    tiers: &[RarityTier],
    floor: &RarityFloor,
    source: &mut S,
) -> Pack
where
    S: UniformSource + ?Sized,
{
    let mut pack = draw_pack(size, names, tiers, source);
    floor.apply(&mut pack);
    pack
}

/// Expected share of each tier under `tiers`, in declared order.
#[must_use]
pub fn expected_shares(tiers: &[RarityTier]) -> Vec<(RarityCode, f64)> {
    let total: f64 = tiers.iter().map(|t| t.weight).sum();
    tiers
        .iter()
        .map(|t| {
            let share = if total > 0.0 { t.weight / total } else { 0.0 };
            (t.code, share)
        })
        .collect()
}

/// Observed share of each tier among `cards`, in the order of `tiers`.
#[must_use]
pub fn observed_shares(tiers: &[RarityTier], cards: &[Card]) -> Vec<(RarityCode, f64)> {
    let total = usize_to_f64(cards.len());
    tiers
        .iter()
        .map(|t| {
            let count = cards.iter().filter(|c| c.code() == t.code).count();
            let share = if cards.is_empty() {
                0.0
            } else {
                usize_to_f64(count) / total
            };
            (t.code, share)
        })
        .collect()
}
