//! Centralized tuning constants for Cardkkang pack logic.
//!
//! Drop rates live in [`crate::rarity::RARITY_TABLE`]; everything else that
//! shapes a pack opening, the counters, or the cosmetic animation is here so it
//! can only change through a reviewed code change.

// Storage ------------------------------------------------------------------
pub const STORAGE_NAMESPACE: &str = "cardkkang";
pub const STORAGE_VERSION: &str = "v1";

// Packs --------------------------------------------------------------------
pub const DEFAULT_PACK_SIZE: usize = 10;

// Milestones ---------------------------------------------------------------
pub const MILESTONE_SPAN: u64 = 100;

// Luck ---------------------------------------------------------------------
pub const LUCK_MULTIPLIER: u32 = 5;
pub const LUCK_CAP: u8 = 100;

// Reel animation -----------------------------------------------------------
pub const REEL_COUNT: usize = 3;
pub const REEL_TICK_MS: u64 = 90;
pub const REEL_FLASH_MS: u64 = 150;
pub const REEL_MIN_TICKS: u32 = 16;
pub const REEL_EXTRA_TICKS: u32 = 10;

// Presentation -------------------------------------------------------------
pub const TILE_STAGGER_MS: u32 = 50;
