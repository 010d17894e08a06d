//! Slide: a selected dot travels in a straight line over the static row.

use super::timing::lerp_i32;
use super::{FrameDelta, Interpolator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideParams {
    pub from_x: i32,
    pub to_x: i32,
}

impl SlideParams {
    pub fn new(from_x: i32, to_x: i32) -> Self {
        Self { from_x, to_x }
    }
}

impl Interpolator for SlideParams {
    fn interpolate(&self, progress: f32) -> FrameDelta {
        FrameDelta::Slide {
            x: lerp_i32(self.from_x, self.to_x, progress),
        }
    }
}
