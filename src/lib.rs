//! Plexus - a proximity-linked particle field for animated backgrounds
//!
//! Core modules:
//! - `field`: Deterministic particle simulation (seeding, kinematics, connections)
//! - `config`: Field configuration, validation, and presets
//! - `renderer`: Draw-instruction assembly and GPU vertex tessellation
//!
//! The engine is host-agnostic: an external scheduler calls [`tick()`](field::tick())
//! on a fixed interval and [`renderables()`](renderer::renderables) on every
//! paint pass, supplying
//! the current viewport size. Particle positions live in normalized `[0,1]²`
//! space; pixel mapping happens only at render time.

pub mod config;
pub mod field;
pub mod renderer;

pub use config::{ConfigError, FieldConfig};
pub use field::{Particle, ParticleField, tick};
pub use renderer::{Frame, Viewport, renderables};

/// Engine tuning constants
pub mod consts {
    /// Normalized-space damping applied to velocity each tick.
    ///
    /// The engine is tick-driven, not delta-time-driven: each tick moves a
    /// particle by exactly `velocity * MOTION_SCALE` regardless of wall-clock
    /// time between ticks.
    pub const MOTION_SCALE: f32 = 0.001;

    /// Default tick interval (ms) between simulation steps
    pub const DEFAULT_TICK_INTERVAL_MS: u32 = 30;

    /// Default field fade-in duration (ms)
    pub const DEFAULT_FADE_IN_MS: u32 = 1000;

    /// Smallest particle radius a config can produce (px)
    pub const MIN_PARTICLE_RADIUS: f32 = 0.1;

    /// Default chance per particle per frame of an alpha flicker
    pub const DEFAULT_FLICKER_CHANCE: f32 = 0.3;
}

/// Map a normalized `[0,1]` coordinate pair into pixel space
#[inline]
pub fn to_pixel_space(pos: glam::Vec2, width: f32, height: f32) -> glam::Vec2 {
    glam::Vec2::new(pos.x * width, pos.y * height)
}
