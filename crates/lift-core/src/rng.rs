//! Deterministic simulation RNG and per-trial seed derivation.
//!
//! # Determinism strategy
//!
//! Every trial of a comparison draws from three independent generators:
//!
//! | Seed      | Drives                                              |
//! |-----------|-----------------------------------------------------|
//! | `stream`  | Poisson arrival increments and floor draws          |
//! | `shuffle` | Elevator speed / loading-rate shuffles              |
//! | `policy`  | Dispatch tie-breaks and random choices              |
//!
//! `stream` and `shuffle` are derived from the run's global seed and the
//! trial index:
//!
//!   seed = global_seed XOR ((trial + 1) * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive trial indices uniformly across the seed space.
//! `policy` is the bare trial index, so tie-breaking in round `n` is the same
//! regardless of the global seed.
//!
//! No generator is shared between trials, so trials can run on any thread in
//! any order and still reproduce bit-for-bit.

use rand::distributions::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Salt separating the shuffle seed from the stream seed of the same trial.
const SHUFFLE_SALT: u64 = 0x5851_f42d_4c95_7f2d;

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seedable simulation RNG.
///
/// Owned by exactly one generator or one running simulation; never shared.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Draw one value from `dist`.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.0)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── TrialSeeds ────────────────────────────────────────────────────────────────

/// The three seeds used by one trial.  Cheap to copy.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TrialSeeds {
    pub stream:  u64,
    pub shuffle: u64,
    pub policy:  u64,
}

impl TrialSeeds {
    /// Seeds for trial `trial` of a run with global seed `seed`.
    pub fn new(seed: u64, trial: u32) -> Self {
        let stream = seed ^ (u64::from(trial) + 1).wrapping_mul(MIXING_CONSTANT);
        Self {
            stream,
            shuffle: stream.rotate_left(32) ^ SHUFFLE_SALT,
            policy:  u64::from(trial),
        }
    }

    /// Seeds for an independent stream in the same trial.
    ///
    /// Slot 0 is `self`.  Other slots re-mix the stream and shuffle seeds and
    /// keep the policy seed, so only the demand differs.
    pub fn with_slot(self, slot: u32) -> Self {
        if slot == 0 {
            return self;
        }
        let salt = u64::from(slot).wrapping_mul(MIXING_CONSTANT).rotate_left(17);
        Self {
            stream:  self.stream ^ salt,
            shuffle: self.shuffle ^ salt,
            policy:  self.policy,
        }
    }

    pub fn stream_rng(&self) -> SimRng {
        SimRng::new(self.stream)
    }

    pub fn shuffle_rng(&self) -> SimRng {
        SimRng::new(self.shuffle)
    }

    pub fn policy_rng(&self) -> SimRng {
        SimRng::new(self.policy)
    }
}
