//! Injectable uniform random sources.
//!
//! Every random decision in the crate goes through [`UniformSource`], so tests
//! can script exact draws and the tester can replay seeded runs.

use hmac::{Hmac, Mac};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use sha2::Sha256;

/// Domain tag for the pack stream of a seeded session.
pub const PACK_STREAM: &[u8] = b"pack";
/// Domain tag for the reel animation stream of a seeded session.
pub const REEL_STREAM: &[u8] = b"reel";

/// A source of uniform reals in `[0, 1)`.
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;
}

impl<T: UniformSource + ?Sized> UniformSource for &mut T {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Seeded `SmallRng` stream that counts its draws.
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: u64,
    rng: SmallRng,
    draws: u64,
}

impl SeededSource {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Derive an independent stream for `domain_tag` from a user-visible seed.
    #[must_use]
    pub fn for_stream(user_seed: u64, domain_tag: &[u8]) -> Self {
        Self::from_seed(derive_stream_seed(user_seed, domain_tag))
    }

    /// Seed from OS entropy; the chosen seed is still reported by [`Self::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = SmallRng::from_entropy().next_u64();
        Self::from_seed(seed)
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of uniform draws taken from this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl UniformSource for SeededSource {
    fn next_unit(&mut self) -> f64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.r#gen::<f64>()
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// An empty script always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    #[must_use]
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Draws consumed so far, counting repeats after cycling.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.saturating_add(1);
        value
    }
}

/// Adapts any `FnMut() -> f64` into a [`UniformSource`].
pub struct FnSource<F>(pub F);

impl<F: FnMut() -> f64> UniformSource for FnSource<F> {
    fn next_unit(&mut self) -> f64 {
        (self.0)()
    }
}

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()) else {
        return user_seed;
    };
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let mut seed_bytes = [0_u8; 8];
    seed_bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed_bytes)
}
