//! Uniform-random sample generator
//!
//! Each measurement is drawn independently from a fixed range. The RNG
//! is injectable so tests can run on a seeded source; production use
//! seeds from entropy.

use std::ops::Range;

use hydrorank_core::Sample;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Hardness draw range (mg/L CaCO3)
pub const HARDNESS_RANGE: Range<f64> = 100.0..400.0;

/// pH draw range
pub const PH_RANGE: Range<f64> = 5.5..8.5;

/// Turbidity draw range (NTU)
pub const TURBIDITY_RANGE: Range<f64> = 0.0..10.0;

/// Heavy-metals draw range (mg/L)
pub const HEAVY_METALS_RANGE: Range<f64> = 0.0..0.1;

/// Microorganism draw range (UFC/100mL)
pub const MICROORGANISMS_RANGE: Range<f64> = 0.0..200.0;

/// Synthetic water-quality sample generator
pub struct SampleGenerator<R: Rng = StdRng> {
    rng: R,
}

impl SampleGenerator<StdRng> {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible runs and tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SampleGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SampleGenerator<R> {
    /// Generator backed by a caller-supplied RNG
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw one sample
    pub fn generate(&mut self) -> Sample {
        Sample {
            hardness: self.rng.gen_range(HARDNESS_RANGE),
            ph: self.rng.gen_range(PH_RANGE),
            turbidity: self.rng.gen_range(TURBIDITY_RANGE),
            heavy_metals: self.rng.gen_range(HEAVY_METALS_RANGE),
            microorganisms: self.rng.gen_range(MICROORGANISMS_RANGE),
        }
    }
}
