//! Rarity tiers and the fixed drop table.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Short rarity code. Ordered from most to least common, so `>=` reads as
/// "this rare or better".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RarityCode {
    C,
    U,
    R,
    SR,
    UR,
}

impl RarityCode {
    pub const ALL: [Self; 5] = [Self::C, Self::U, Self::R, Self::SR, Self::UR];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::U => "U",
            Self::R => "R",
            Self::SR => "SR",
            Self::UR => "UR",
        }
    }

    #[must_use]
    pub const fn is_rare_or_better(self) -> bool {
        matches!(self, Self::R | Self::SR | Self::UR)
    }

    /// Points contributed to the luck score before the multiplier.
    #[must_use]
    pub const fn luck_points(self) -> u32 {
        match self {
            Self::UR => 10,
            Self::SR => 6,
            Self::R => 3,
            Self::U => 1,
            Self::C => 0,
        }
    }
}

impl fmt::Display for RarityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rarity code: {0:?} (expected one of C, U, R, SR, UR)")]
pub struct ParseRarityError(pub String);

impl FromStr for RarityCode {
    type Err = ParseRarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseRarityError(s.to_string()))
    }
}

/// One entry of a drop table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RarityTier {
    pub code: RarityCode,
    pub name: &'static str,
    /// Relative weight; entries need not sum to any fixed total.
    pub weight: f64,
    /// Class tag the presentation layer attaches to a tile of this rarity.
    pub class_tag: &'static str,
}

impl RarityTier {
    #[must_use]
    pub const fn new(
        code: RarityCode,
        name: &'static str,
        weight: f64,
        class_tag: &'static str,
    ) -> Self {
        Self {
            code,
            name,
            weight,
            class_tag,
        }
    }
}

/// The shipped drop table, in tie-break order.
pub const RARITY_TABLE: [RarityTier; 5] = [
    RarityTier::new(RarityCode::C, "Common", 60.0, "card-c"),
    RarityTier::new(RarityCode::U, "Uncommon", 25.0, "card-u"),
    RarityTier::new(RarityCode::R, "Rare", 10.0, "card-r"),
    RarityTier::new(RarityCode::SR, "Super Rare", 4.0, "card-sr"),
    RarityTier::new(RarityCode::UR, "Ultra Rare", 1.0, "card-ur"),
];

/// Look up a tier of the shipped table by code.
#[must_use]
pub fn tier(code: RarityCode) -> &'static RarityTier {
    match code {
        RarityCode::C => &RARITY_TABLE[0],
        RarityCode::U => &RARITY_TABLE[1],
        RarityCode::R => &RARITY_TABLE[2],
        RarityCode::SR => &RARITY_TABLE[3],
        RarityCode::UR => &RARITY_TABLE[4],
    }
}

/// Find a tier by code in an arbitrary table.
#[must_use]
pub fn find_tier(tiers: &[RarityTier], code: RarityCode) -> Option<&RarityTier> {
    tiers.iter().find(|t| t.code == code)
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TierTableError {
    #[error("tier table is empty")]
    Empty,
    #[error("tier {code} has invalid weight {weight}")]
    InvalidWeight { code: RarityCode, weight: f64 },
    #[error("tier weights sum to zero")]
    ZeroTotal,
}

/// Check that a table can be fed to [`crate::pack::pick_weighted`].
///
/// # Errors
///
/// Returns an error for an empty table, a negative or non-finite weight, or a
/// table whose weights sum to zero.
pub fn validate_tiers(tiers: &[RarityTier]) -> Result<(), TierTableError> {
    if tiers.is_empty() {
        return Err(TierTableError::Empty);
    }
    if let Some(bad) = tiers
        .iter()
        .find(|t| !t.weight.is_finite() || t.weight < 0.0)
    {
        return Err(TierTableError::InvalidWeight {
            code: bad.code,
            weight: bad.weight,
        });
    }
    let total: f64 = tiers.iter().map(|t| t.weight).sum();
    if total <= 0.0 {
        return Err(TierTableError::ZeroTotal);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_table_is_valid_and_ordered() {
        validate_tiers(&RARITY_TABLE).unwrap();
        let codes: Vec<RarityCode> = RARITY_TABLE.iter().map(|t| t.code).collect();
        assert_eq!(codes, RarityCode::ALL.to_vec());
        let weights: Vec<f64> = RARITY_TABLE.iter().map(|t| t.weight).collect();
        assert_eq!(weights, vec![60.0, 25.0, 10.0, 4.0, 1.0]);
    }

    #[test]
    fn tier_lookup_matches_code() {
        for code in RarityCode::ALL {
            assert_eq!(tier(code).code, code);
        }
        assert_eq!(tier(RarityCode::SR).class_tag, "card-sr");
        assert_eq!(tier(RarityCode::UR).name, "Ultra Rare");
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("sr".parse::<RarityCode>().unwrap(), RarityCode::SR);
        assert_eq!(" UR ".parse::<RarityCode>().unwrap(), RarityCode::UR);
        let err = "XR".parse::<RarityCode>().unwrap_err();
        assert!(err.to_string().contains("XR"));
    }

    #[test]
    fn rare_or_better_starts_at_rare() {
        assert!(!RarityCode::C.is_rare_or_better());
        assert!(!RarityCode::U.is_rare_or_better());
        assert!(RarityCode::R.is_rare_or_better());
        assert!(RarityCode::SR >= RarityCode::R);
        assert!(RarityCode::UR.is_rare_or_better());
    }

    #[test]
    fn validate_rejects_bad_tables() {
        assert_eq!(validate_tiers(&[]), Err(TierTableError::Empty));

        let negative = [RarityTier::new(RarityCode::C, "Common", -1.0, "card-c")];
        assert!(matches!(
            validate_tiers(&negative),
            Err(TierTableError::InvalidWeight { code: RarityCode::C, .. })
        ));

        let zero = [
            RarityTier::new(RarityCode::C, "Common", 0.0, "card-c"),
            RarityTier::new(RarityCode::U, "Uncommon", 0.0, "card-u"),
        ];
        assert_eq!(validate_tiers(&zero), Err(TierTableError::ZeroTotal));
    }
}
