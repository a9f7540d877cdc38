//! Connection geometry
//!
//! Pure helpers deciding whether two particles are joined by a line and how
//! opaque that line is. Distances are measured in pixel space: normalized
//! positions are scaled by the viewport before comparing against
//! `connection_distance`, which is itself configured in pixels.

use glam::Vec2;

use crate::config::FieldConfig;

/// Pixel-space distance between two normalized positions.
#[inline]
pub fn pixel_distance(a: Vec2, b: Vec2, width: f32, height: f32) -> f32 {
    let dx = (b.x - a.x) * width;
    let dy = (b.y - a.y) * height;
    dx.hypot(dy)
}

/// Line alpha for a pair at `distance` pixels apart, before fade-in scaling.
///
/// `None` when the pair is not connected (distance at or beyond the
/// threshold). Otherwise the alpha falls off linearly from `line_alpha_max`
/// at zero distance, gains the constant floor, and is clamped to the ceiling.
pub fn connection_alpha(distance: f32, config: &FieldConfig) -> Option<f32> {
    let max_dist = config.connection_distance;
    if !(distance < max_dist) {
        return None;
    }
    let falloff = config.line_alpha_max * (1.0 - distance / max_dist);
    Some((config.line_alpha_floor + falloff).clamp(0.0, config.line_alpha_ceiling))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_distance_scales_per_axis() {
        let a = Vec2::new(0.1, 0.1);
        let b = Vec2::new(0.1, 0.2);
        // 0.1 of a 100px-tall viewport = 10px
        assert!((pixel_distance(a, b, 100.0, 100.0) - 10.0).abs() < 1e-4);
        // Same normalized offset on a 1000px-tall viewport = 100px
        assert!((pixel_distance(a, b, 100.0, 1000.0) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_pixel_distance_is_symmetric() {
        let a = Vec2::new(0.3, 0.7);
        let b = Vec2::new(0.8, 0.2);
        assert_eq!(
            pixel_distance(a, b, 640.0, 480.0),
            pixel_distance(b, a, 640.0, 480.0)
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let config = FieldConfig {
            connection_distance: 100.0,
            ..Default::default()
        };
        let eps = 0.01;
        assert!(connection_alpha(100.0 - eps, &config).is_some());
        assert!(connection_alpha(100.0, &config).is_none());
        assert!(connection_alpha(100.0 + eps, &config).is_none());
    }

    #[test]
    fn test_alpha_falls_off_linearly_to_floor() {
        let config = FieldConfig {
            connection_distance: 100.0,
            line_alpha_max: 0.3,
            line_alpha_floor: 0.1,
            line_alpha_ceiling: 0.4,
            ..Default::default()
        };
        let close = connection_alpha(0.0, &config).unwrap();
        let mid = connection_alpha(50.0, &config).unwrap();
        let far = connection_alpha(99.9, &config).unwrap();

        assert!((close - 0.4).abs() < 1e-6);
        assert!((mid - 0.25).abs() < 1e-6);
        assert!(far > 0.1 - 1e-6 && far < 0.102);
        assert!(close > mid && mid > far);
    }

    #[test]
    fn test_ceiling_clamps_near_pairs() {
        let config = FieldConfig {
            connection_distance: 120.0,
            line_alpha_max: 0.3,
            line_alpha_floor: 0.0,
            line_alpha_ceiling: 0.2,
            ..Default::default()
        };
        // Falloff alone would be 0.3 at distance 0
        assert_eq!(connection_alpha(0.0, &config), Some(0.2));
    }
}
