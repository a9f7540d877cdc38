//! The particle value type

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::FieldConfig;

/// A single drifting particle.
///
/// Position and velocity are in normalized `[0,1]` space; `radius` and
/// `base_alpha` are sampled once at seeding and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Position, both components in `[0,1]`
    pub pos: Vec2,
    /// Velocity in normalized units per tick (before motion damping)
    pub vel: Vec2,
    /// Draw radius in pixels
    pub radius: f32,
    /// Resting opacity in `[0,1]`
    pub base_alpha: f32,
}

impl Particle {
    /// Sample a fresh particle from the config's ranges.
    pub fn seeded<R: Rng>(rng: &mut R, config: &FieldConfig) -> Self {
        let (speed_min, speed_max) = config.speed_range;
        let (size_min, size_max) = config.size_range;
        let (alpha_min, alpha_max) = config.base_alpha_range;

        Self {
            pos: Vec2::new(rng.random::<f32>(), rng.random::<f32>()),
            vel: Vec2::new(
                rng.random_range(speed_min..=speed_max),
                rng.random_range(speed_min..=speed_max),
            ),
            radius: rng.random_range(size_min..=size_max),
            base_alpha: rng.random_range(alpha_min..=alpha_max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_seeded_respects_ranges() {
        let config = FieldConfig {
            size_range: (2.0, 5.0),
            speed_range: (-0.5, 0.5),
            base_alpha_range: (0.2, 0.9),
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(7);

        for _ in 0..200 {
            let p = Particle::seeded(&mut rng, &config);
            assert!((0.0..=1.0).contains(&p.pos.x));
            assert!((0.0..=1.0).contains(&p.pos.y));
            assert!((-0.5..=0.5).contains(&p.vel.x));
            assert!((-0.5..=0.5).contains(&p.vel.y));
            assert!((2.0..=5.0).contains(&p.radius));
            assert!((0.2..=0.9).contains(&p.base_alpha));
        }
    }

    #[test]
    fn test_degenerate_ranges_pin_values() {
        let config = FieldConfig {
            size_range: (3.0, 3.0),
            speed_range: (0.0, 0.0),
            base_alpha_range: (1.0, 1.0),
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        let p = Particle::seeded(&mut rng, &config);
        assert_eq!(p.radius, 3.0);
        assert_eq!(p.vel, Vec2::ZERO);
        assert_eq!(p.base_alpha, 1.0);
    }
}
