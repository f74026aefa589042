//! The injected random source.
//!
//! Generators never reach for an ambient generator; callers pass `&mut impl Rng`.
//! These helpers build the two sources the rest of the crate expects: a seeded one
//! that reproduces the exact same models, and an entropy-backed one for live use.

use rand::SeedableRng;
use rand::rngs::StdRng;

pub type RandomSource = StdRng;

/// Deterministic source: the same seed reproduces the same clouds, layouts and samples.
pub fn seeded(seed: u64) -> RandomSource {
    StdRng::seed_from_u64(seed)
}

pub fn from_entropy() -> RandomSource {
    StdRng::from_entropy()
}

/// Seeded when `seed` is given, entropy-backed otherwise.
pub fn source(seed: Option<u64>) -> RandomSource {
    match seed {
        Some(seed) => seeded(seed),
        None => from_entropy(),
    }
}
