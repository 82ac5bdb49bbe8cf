//! Random-engine selection and seeding for the transport engine.
//!
//! # Seeding
//!
//! [`RngSeed`] is either `Auto` (the engine draws its own seed, so runs are
//! not reproducible) or `Explicit(seed)`.  For explicit seeds,
//! [`RngConfig::thread_seeds`] derives one independent seed per engine
//! worker thread:
//!
//!   seed_i = next_u64(stream) XOR (i * MIXING_CONSTANT)
//!
//! where `stream` is a `SmallRng` seeded from the master seed.  The same
//! master seed and thread count always give the same per-thread seeds.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RngEngine ─────────────────────────────────────────────────────────────────

/// Pseudo-random engine used by the transport engine.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RngEngine {
    #[default]
    MersenneTwister,
    MixMax,
    Ranlux64,
}

impl RngEngine {
    pub fn as_str(self) -> &'static str {
        match self {
            RngEngine::MersenneTwister => "MersenneTwister",
            RngEngine::MixMax          => "MixMax",
            RngEngine::Ranlux64        => "Ranlux64",
        }
    }
}

impl fmt::Display for RngEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RngSeed ───────────────────────────────────────────────────────────────────

/// Master seed for a run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RngSeed {
    /// Let the engine pick a seed at start-up.
    #[default]
    Auto,
    /// Reproducible run with a fixed seed.
    Explicit(u64),
}

impl RngSeed {
    pub fn is_reproducible(self) -> bool {
        matches!(self, RngSeed::Explicit(_))
    }
}

impl fmt::Display for RngSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RngSeed::Auto        => f.write_str("auto"),
            RngSeed::Explicit(s) => write!(f, "{s}"),
        }
    }
}

// ── RngConfig ─────────────────────────────────────────────────────────────────

/// Engine plus seed, as handed to the transport engine.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RngConfig {
    pub engine: RngEngine,
    pub seed:   RngSeed,
}

impl RngConfig {
    pub fn new(engine: RngEngine, seed: RngSeed) -> Self {
        Self { engine, seed }
    }

    /// One seed per worker thread, or `None` when the seed is `Auto`.
    pub fn thread_seeds(&self, threads: usize) -> Option<Vec<u64>> {
        match self.seed {
            RngSeed::Auto => None,
            RngSeed::Explicit(master) => {
                let mut stream = SeedStream::new(master);
                Some((0..threads as u64).map(|i| stream.next_seed(i)).collect())
            }
        }
    }
}

// ── SeedStream ────────────────────────────────────────────────────────────────

/// Deterministic source of derived seeds.
///
/// Used only in single-threaded contexts (seed derivation happens before the
/// engine starts).
pub struct SeedStream(SmallRng);

impl SeedStream {
    pub fn new(master: u64) -> Self {
        SeedStream(SmallRng::seed_from_u64(master))
    }

    /// Next derived seed, mixed with `offset` so that streams for different
    /// consumers diverge even if they draw the same number of values.
    pub fn next_seed(&mut self, offset: u64) -> u64 {
        self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT)
    }
}
