//! Deterministic RNG for texture generation.
//!
//! All seeded randomness in this backend flows through the linear
//! congruential generator below so that the same seed always reproduces the
//! same element layout and jitter. The generator carries its state
//! explicitly; there is no hidden shared mutation, and independent callers
//! each construct their own instance.

use rand::Rng;

/// LCG multiplier.
pub const LCG_MULTIPLIER: u64 = 9301;
/// LCG increment.
pub const LCG_INCREMENT: u64 = 49297;
/// LCG modulus; also the denominator of the emitted floats.
pub const LCG_MODULUS: u64 = 233280;
/// Exclusive upper bound for entropy-drawn seeds.
pub const ENTROPY_SEED_BOUND: u32 = 10_000;

/// Linear congruential generator emitting floats in `[0, 1)`.
///
/// The recurrence is `state = (state * 9301 + 49297) mod 233280`, with each
/// emitted value being `state / 233280`. Cloning the generator forks the
/// stream at the current state, which makes test comparisons trivial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Create a new generator from a seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    /// Create a generator seeded from thread-local entropy.
    ///
    /// Used by the random arrangement when the caller supplies no top-level
    /// seed: each generation call gets a fresh, non-reproducible layout.
    /// Seeds are drawn below [`ENTROPY_SEED_BOUND`].
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen_range(0..ENTROPY_SEED_BOUND);
        Self::new(seed)
    }

    /// Advance the state and return the next float in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }
}
