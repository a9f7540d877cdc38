//! Field configuration, validation, and presets
//!
//! A [`FieldConfig`] is immutable once a field is constructed from it. Range
//! options with `min > max` are rejected at construction; every other
//! out-of-domain scalar is clamped into its legal domain instead, since a
//! slightly odd-looking frame beats crashing an animation loop.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Named colors used by the built-in presets
pub mod palette {
    /// Cornflower blue particle body
    pub const CORNFLOWER: [f32; 3] = [0.392, 0.584, 0.929];
    /// Saturated tech blue for the dense preset
    pub const TECH_BLUE: [f32; 3] = [0.102, 0.624, 0.906];
    /// Light gray connection lines
    pub const LIGHT_GRAY: [f32; 3] = [0.827, 0.827, 0.827];
    pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
}

/// Configuration rejected at field construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} range has min {min} > max {max}")]
    InvertedRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
}

/// Immutable particle field configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of particles seeded at construction (fixed for the field's life)
    pub particle_count: usize,
    /// Pixel-space distance below which two particles are joined by a line
    pub connection_distance: f32,
    /// Particle radius range in pixels, sampled once per particle
    pub size_range: (f32, f32),
    /// Per-axis velocity bounds in normalized units per tick (pre-damping)
    pub speed_range: (f32, f32),
    /// Resting particle opacity range, sampled once per particle
    pub base_alpha_range: (f32, f32),
    /// Interval between simulation ticks (ms); also drives fade-in timing
    pub tick_interval_ms: u32,
    /// Duration of the one-shot field fade-in (ms); 0 starts fully opaque
    pub fade_in_ms: u32,
    /// Particle RGB
    pub particle_color: [f32; 3],
    /// Connection line RGB
    pub line_color: [f32; 3],
    /// Connection line stroke width (px)
    pub line_stroke_width: f32,
    /// Line alpha at zero distance, before the ceiling clamp
    pub line_alpha_max: f32,
    /// Constant added to line alpha before clamping
    pub line_alpha_floor: f32,
    /// Upper clamp on the final line alpha
    pub line_alpha_ceiling: f32,
    /// Chance per particle per frame that the flicker alpha replaces base alpha
    pub flicker_chance: f32,
    /// Alpha range sampled when a flicker fires
    pub flicker_alpha_range: (f32, f32),
}

impl Default for FieldConfig {
    /// Subtle background layer: sparse drift, faint lines, no flicker.
    fn default() -> Self {
        Self {
            particle_count: 80,
            connection_distance: 100.0,
            size_range: (1.0, 4.0),
            speed_range: (-1.0, 1.0),
            base_alpha_range: (0.3, 1.0),
            tick_interval_ms: 25,
            fade_in_ms: DEFAULT_FADE_IN_MS,
            particle_color: palette::CORNFLOWER,
            line_color: palette::LIGHT_GRAY,
            line_stroke_width: 1.5,
            line_alpha_max: 0.3,
            line_alpha_floor: 0.1,
            line_alpha_ceiling: 0.4,
            flicker_chance: 0.0,
            flicker_alpha_range: (0.5, 0.8),
        }
    }
}

impl FieldConfig {
    /// Dense overlay layer: more particles, longer reach, flickering alpha.
    pub fn dense() -> Self {
        Self {
            particle_count: 100,
            connection_distance: 120.0,
            size_range: (1.0, 3.0),
            base_alpha_range: (0.3, 0.8),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            particle_color: palette::TECH_BLUE,
            line_color: palette::WHITE,
            line_stroke_width: 3.0,
            line_alpha_max: 0.3,
            line_alpha_floor: 0.0,
            line_alpha_ceiling: 0.2,
            flicker_chance: DEFAULT_FLICKER_CHANCE,
            ..Self::default()
        }
    }

    /// Check the hard constraints: every declared range must have min <= max.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, (min, max)) in [
            ("size", self.size_range),
            ("speed", self.speed_range),
            ("base_alpha", self.base_alpha_range),
            ("flicker_alpha", self.flicker_alpha_range),
        ] {
            if min > max {
                return Err(ConfigError::InvertedRange { name, min, max });
            }
        }
        Ok(())
    }

    /// Clamp every soft option into its legal domain.
    ///
    /// Called after `validate`, so all ranges are already ordered.
    pub(crate) fn sanitized(mut self) -> Self {
        self.connection_distance = self.connection_distance.max(0.0);
        self.size_range.0 = self.size_range.0.max(MIN_PARTICLE_RADIUS);
        self.size_range.1 = self.size_range.1.max(MIN_PARTICLE_RADIUS);
        self.base_alpha_range.0 = self.base_alpha_range.0.clamp(0.0, 1.0);
        self.base_alpha_range.1 = self.base_alpha_range.1.clamp(0.0, 1.0);
        self.flicker_alpha_range.0 = self.flicker_alpha_range.0.clamp(0.0, 1.0);
        self.flicker_alpha_range.1 = self.flicker_alpha_range.1.clamp(0.0, 1.0);
        self.tick_interval_ms = self.tick_interval_ms.max(1);
        self.line_stroke_width = self.line_stroke_width.max(0.0);
        self.line_alpha_max = self.line_alpha_max.clamp(0.0, 1.0);
        self.line_alpha_floor = self.line_alpha_floor.clamp(0.0, 1.0);
        self.line_alpha_ceiling = self.line_alpha_ceiling.clamp(0.0, 1.0);
        self.flicker_chance = self.flicker_chance.clamp(0.0, 1.0);
        self
    }

    /// Parse a config from JSON; missing fields take their preset defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON (for config files and debugging)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
