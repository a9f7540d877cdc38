//! Per-frame alpha flicker sampling
//!
//! Some presets give particles a nervous shimmer: each frame, each particle
//! has a fixed chance of drawing with a freshly sampled alpha instead of its
//! resting one. The sampler owns its own PRNG stream so render-time sampling
//! never perturbs the seeding sequence, and two fields built from the same
//! seed flicker identically.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Stateful flicker source owned by a field
#[derive(Debug, Clone)]
pub struct FlickerSampler {
    rng: Pcg32,
    chance: f32,
    alpha_range: (f32, f32),
}

impl FlickerSampler {
    pub fn new(seed: u64, chance: f32, alpha_range: (f32, f32)) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            chance,
            alpha_range,
        }
    }

    /// A sampler that never fires
    pub fn disabled() -> Self {
        Self::new(0, 0.0, (0.0, 0.0))
    }

    /// Roll the flicker for one particle this frame.
    ///
    /// Returns `Some(alpha)` when the flicker fires. A chance of 0 returns
    /// `None` without consuming randomness, so disabling the effect keeps the
    /// stream untouched.
    pub fn sample(&mut self) -> Option<f32> {
        if self.chance <= 0.0 {
            return None;
        }
        if self.rng.random::<f32>() < self.chance {
            let (min, max) = self.alpha_range;
            Some(self.rng.random_range(min..=max))
        } else {
            None
        }
    }
}
