//! Scale: the incoming indicator grows from the unselected radius to the
//! full radius while the outgoing one shrinks, with colors blended as in
//! the color animation.

use crate::color::Color;

use super::color::ColorParams;
use super::timing::lerp_u32;
use super::{FrameDelta, Interpolator};

pub const DEFAULT_SCALE_FACTOR: f32 = 0.7;
pub const MIN_SCALE_FACTOR: f32 = 0.3;
pub const MAX_SCALE_FACTOR: f32 = 1.0;

/// Clamp a scale factor into its valid range, falling back to the default
/// for NaN.
pub fn clamp_scale_factor(factor: f32) -> f32 {
    if factor.is_nan() {
        DEFAULT_SCALE_FACTOR
    } else {
        factor.clamp(MIN_SCALE_FACTOR, MAX_SCALE_FACTOR)
    }
}

/// Resting radius of an unselected indicator when the scale style is active
pub fn unselected_radius(base_radius: u32, scale_factor: f32) -> u32 {
    (base_radius as f32 * clamp_scale_factor(scale_factor)).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleParams {
    pub from: Color,
    pub to: Color,
    pub base_radius: u32,
    pub scale_factor: f32,
}

impl ScaleParams {
    pub fn new(from: Color, to: Color, base_radius: u32, scale_factor: f32) -> Self {
        Self {
            from,
            to,
            base_radius,
            scale_factor: clamp_scale_factor(scale_factor),
        }
    }

    pub fn unselected_radius(&self) -> u32 {
        unselected_radius(self.base_radius, self.scale_factor)
    }
}

impl Interpolator for ScaleParams {
    fn interpolate(&self, progress: f32) -> FrameDelta {
        let (color, color_reverse) = ColorParams::new(self.from, self.to).colors(progress);
        let small = self.unselected_radius();
        FrameDelta::Scale {
            color,
            color_reverse,
            radius: lerp_u32(small, self.base_radius, progress),
            radius_reverse: lerp_u32(self.base_radius, small, progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ScaleParams {
        ScaleParams::new(Color::argb(0x33, 0xff, 0xff, 0xff), Color::WHITE, 10, 0.7)
    }

    #[test]
    fn test_factor_clamped() {
        assert_eq!(clamp_scale_factor(0.1), MIN_SCALE_FACTOR);
        assert_eq!(clamp_scale_factor(4.0), MAX_SCALE_FACTOR);
        assert_eq!(clamp_scale_factor(f32::NAN), DEFAULT_SCALE_FACTOR);
        assert_eq!(ScaleParams::new(Color::WHITE, Color::WHITE, 10, 9.0).scale_factor, 1.0);
    }

    #[test]
    fn test_unselected_radius_is_smaller() {
        assert_eq!(unselected_radius(10, 0.7), 7);
        assert_eq!(unselected_radius(6, 0.5), 3);
        assert_eq!(unselected_radius(6, 1.0), 6);
    }

    #[test]
    fn test_boundaries() {
        let p = params();
        match p.interpolate(0.0) {
            FrameDelta::Scale {
                color,
                color_reverse,
                radius,
                radius_reverse,
            } => {
                assert_eq!(color, p.from);
                assert_eq!(color_reverse, p.to);
                assert_eq!(radius, 7);
                assert_eq!(radius_reverse, 10);
            }
            other => panic!("unexpected delta {:?}", other),
        }
        match p.interpolate(1.0) {
            FrameDelta::Scale {
                color,
                color_reverse,
                radius,
                radius_reverse,
            } => {
                assert_eq!(color, p.to);
                assert_eq!(color_reverse, p.from);
                assert_eq!(radius, 10);
                assert_eq!(radius_reverse, 7);
            }
            other => panic!("unexpected delta {:?}", other),
        }
    }

    #[test]
    fn test_radii_monotonic() {
        let p = ScaleParams::new(Color::TRANSPARENT, Color::WHITE, 40, 0.3);
        let mut prev = (0u32, u32::MAX);
        for i in 0..=50 {
            if let FrameDelta::Scale {
                radius,
                radius_reverse,
                ..
            } = p.interpolate(i as f32 / 50.0)
            {
                assert!(radius >= prev.0);
                assert!(radius_reverse <= prev.1);
                prev = (radius, radius_reverse);
            }
        }
        assert_eq!(prev, (40, 12));
    }
}
