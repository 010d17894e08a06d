//! Color blend: the incoming indicator fades from the unselected to the
//! selected color while the outgoing one fades back.

use crate::color::Color;

use super::{FrameDelta, Interpolator};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorParams {
    pub from: Color,
    pub to: Color,
}

impl ColorParams {
    pub fn new(from: Color, to: Color) -> Self {
        Self { from, to }
    }

    #[inline]
    pub(crate) fn colors(&self, progress: f32) -> (Color, Color) {
        (
            self.from.lerp(self.to, progress),
            self.to.lerp(self.from, progress),
        )
    }
}

impl Interpolator for ColorParams {
    fn interpolate(&self, progress: f32) -> FrameDelta {
        let (color, color_reverse) = self.colors(progress);
        FrameDelta::Color {
            color,
            color_reverse,
        }
    }
}
