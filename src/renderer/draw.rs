//! Frame assembly
//!
//! Turns current field state into an ordered list of draw instructions. The
//! host supplies the viewport each call because particle positions are stored
//! normalized; this is the only place pixel mapping happens. Particle state is
//! never mutated here; only the flicker stream advances.

use glam::Vec2;

use crate::field::{ParticleField, connect};
use crate::to_pixel_space;

/// Current drawing surface dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Filled circle instruction (one per particle)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleCmd {
    /// Center in pixel space
    pub center: Vec2,
    /// Radius in pixels
    pub radius: f32,
    /// RGBA, alpha already fade-in scaled
    pub color: [f32; 4],
}

/// Stroked line instruction (one per connected pair)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCmd {
    pub start: Vec2,
    pub end: Vec2,
    pub color: [f32; 4],
    pub stroke_width: f32,
}

/// One frame's worth of draw instructions
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub circles: Vec<CircleCmd>,
    pub lines: Vec<LineCmd>,
}

/// Produce the current frame's draw instructions.
///
/// Circles come first (one per particle), then one line per unordered pair
/// whose pixel-space distance is strictly below `connection_distance`. Pair
/// enumeration is the exhaustive `C(n,2)` sweep; fine at the intended scale
/// of ~100 particles.
pub fn renderables(field: &mut ParticleField, viewport: Viewport) -> Frame {
    let fade = field.fade_in_opacity();
    let ParticleField {
        ref particles,
        ref config,
        ref mut flicker,
        ..
    } = *field;

    let [pr, pg, pb] = config.particle_color;
    let mut circles = Vec::with_capacity(particles.len());
    for p in particles {
        let alpha = flicker.sample().unwrap_or(p.base_alpha) * fade;
        circles.push(CircleCmd {
            center: to_pixel_space(p.pos, viewport.width, viewport.height),
            radius: p.radius,
            color: [pr, pg, pb, alpha],
        });
    }

    let [lr, lg, lb] = config.line_color;
    let mut lines = Vec::new();
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let dist = connect::pixel_distance(
                particles[i].pos,
                particles[j].pos,
                viewport.width,
                viewport.height,
            );
            if let Some(alpha) = connect::connection_alpha(dist, config) {
                lines.push(LineCmd {
                    start: to_pixel_space(particles[i].pos, viewport.width, viewport.height),
                    end: to_pixel_space(particles[j].pos, viewport.width, viewport.height),
                    color: [lr, lg, lb, alpha * fade],
                    stroke_width: config.line_stroke_width,
                });
            }
        }
    }

    Frame { circles, lines }
}
