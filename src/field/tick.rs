//! Fixed logical timestep
//!
//! One call to [`tick`] is exactly one simulation step. The engine is
//! tick-driven rather than delta-time-driven: wall-clock jitter between timer
//! firings changes apparent speed, never trajectory. Callers wanting
//! frame-rate-independent motion must resample their timer, not this engine.

use crate::consts::MOTION_SCALE;
use crate::field::particle::Particle;
use crate::field::state::ParticleField;

/// Advance the field by one tick.
///
/// Pure state transition: positions integrate damped velocity, then each axis
/// independently reflects (velocity negated, position clamped) if the new
/// coordinate left `[0,1]`. No randomness, no drawing.
pub fn tick(field: &mut ParticleField) {
    field.time_ticks += 1;
    for particle in &mut field.particles {
        step_particle(particle);
    }
}

fn step_particle(p: &mut Particle) {
    p.pos += p.vel * MOTION_SCALE;

    if p.pos.x < 0.0 || p.pos.x > 1.0 {
        p.vel.x = -p.vel.x;
        p.pos.x = p.pos.x.clamp(0.0, 1.0);
    }
    if p.pos.y < 0.0 || p.pos.y > 1.0 {
        p.vel.y = -p.vel.y;
        p.pos.y = p.pos.y.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_reflection_negates_velocity_and_clamps() {
        let mut p = Particle {
            pos: Vec2::new(0.9995, 0.5),
            vel: Vec2::new(1.0, 0.0),
            radius: 2.0,
            base_alpha: 1.0,
        };
        // 0.9995 + 1.0 * 0.001 = 1.0005, outside the unit square
        step_particle(&mut p);
        assert_eq!(p.vel.x, -1.0);
        assert!(p.pos.x <= 1.0);

        // Same at the low edge
        let mut p = Particle {
            pos: Vec2::new(0.0002, 0.5),
            vel: Vec2::new(-1.0, 0.0),
            radius: 2.0,
            base_alpha: 1.0,
        };
        step_particle(&mut p);
        assert_eq!(p.vel.x, 1.0);
        assert!(p.pos.x >= 0.0);
    }

    #[test]
    fn test_interior_step_is_plain_integration() {
        let mut p = Particle {
            pos: Vec2::new(0.5, 0.5),
            vel: Vec2::new(1.0, -1.0),
            radius: 2.0,
            base_alpha: 1.0,
        };
        step_particle(&mut p);
        assert!((p.pos.x - 0.501).abs() < 1e-6);
        assert!((p.pos.y - 0.499).abs() < 1e-6);
        assert_eq!(p.vel, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_tick_preserves_particle_count() {
        let mut field = ParticleField::new(11, FieldConfig::default()).unwrap();
        for _ in 0..50 {
            tick(&mut field);
        }
        assert_eq!(field.particles.len(), 80);
        assert_eq!(field.time_ticks, 50);
    }

    #[test]
    fn test_equal_seeds_produce_equal_trajectories() {
        let mut a = ParticleField::new(99999, FieldConfig::dense()).unwrap();
        let mut b = ParticleField::new(99999, FieldConfig::dense()).unwrap();

        for _ in 0..200 {
            tick(&mut a);
            tick(&mut b);
        }
        assert_eq!(a.particles, b.particles);
        assert_eq!(a.time_ticks, b.time_ticks);
    }

    proptest! {
        #[test]
        fn prop_positions_stay_in_unit_square(seed in any::<u64>(), ticks in 0usize..400) {
            let config = FieldConfig {
                particle_count: 20,
                ..Default::default()
            };
            let mut field = ParticleField::new(seed, config).unwrap();
            for _ in 0..ticks {
                tick(&mut field);
            }
            for p in &field.particles {
                prop_assert!((0.0..=1.0).contains(&p.pos.x));
                prop_assert!((0.0..=1.0).contains(&p.pos.y));
            }
        }

        #[test]
        fn prop_reflection_preserves_speed(seed in any::<u64>()) {
            let config = FieldConfig {
                particle_count: 10,
                ..Default::default()
            };
            let mut field = ParticleField::new(seed, config).unwrap();
            let speeds: Vec<f32> = field.particles.iter().map(|p| p.vel.length()).collect();
            for _ in 0..300 {
                tick(&mut field);
            }
            for (p, speed) in field.particles.iter().zip(&speeds) {
                prop_assert!((p.vel.length() - speed).abs() < 1e-4);
            }
        }
    }
}
