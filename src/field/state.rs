//! Field state and lifecycle
//!
//! A [`ParticleField`] is seeded once from a `u64` seed and a validated
//! config, then driven by an external scheduler: `tick` on a fixed interval,
//! `renderables` on every paint pass. Equal seed + equal config means equal
//! trajectories, flicker included.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::flicker::FlickerSampler;
use super::particle::Particle;
use crate::config::{ConfigError, FieldConfig};

/// Salt mixed into the field seed for the flicker stream, so flicker sampling
/// never disturbs the seeding sequence.
const FLICKER_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// A fixed-cardinality set of drifting particles
#[derive(Debug, Clone)]
pub struct ParticleField {
    /// Seed for reproducibility
    pub seed: u64,
    /// Configuration, immutable after construction
    pub config: FieldConfig,
    /// Particle sequence; cardinality never changes after seeding
    pub particles: Vec<Particle>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Per-frame flicker alpha sampler
    pub(crate) flicker: FlickerSampler,
}

impl ParticleField {
    /// Create a field with `config.particle_count` randomly seeded particles.
    ///
    /// Fails only on a range with `min > max`; all other out-of-domain
    /// options are clamped.
    pub fn new(seed: u64, config: FieldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let config = config.sanitized();

        let mut rng = Pcg32::seed_from_u64(seed);
        let particles = (0..config.particle_count)
            .map(|_| Particle::seeded(&mut rng, &config))
            .collect();

        let flicker = FlickerSampler::new(
            seed ^ FLICKER_SEED_SALT,
            config.flicker_chance,
            config.flicker_alpha_range,
        );

        log::debug!(
            "seeded particle field: {} particles, seed {}",
            config.particle_count,
            seed
        );

        Ok(Self {
            seed,
            config,
            particles,
            time_ticks: 0,
            flicker,
        })
    }

    /// Logical elapsed time (ms) derived from the tick counter.
    ///
    /// The engine keeps no wall clock; "elapsed time" is always
    /// `ticks * tick_interval_ms`.
    pub fn elapsed_ms(&self) -> u64 {
        self.time_ticks * u64::from(self.config.tick_interval_ms)
    }

    /// Global fade-in opacity: climbs from 0 to 1 over `fade_in_ms` and stays
    /// pinned at 1 afterwards. Never restarts.
    pub fn fade_in_opacity(&self) -> f32 {
        if self.config.fade_in_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms() as f32 / self.config.fade_in_ms as f32).min(1.0)
    }
}
