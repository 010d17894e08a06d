//! Selection animations for the indicator row
//!
//! # Architecture
//!
//! ## Atoms
//! - `timing` - Progress and interpolation helpers
//! - `color`, `scale`, `worm`, `slide` - One interpolator per style, each a
//!   pure function of progress in [0, 1]
//!
//! ## Molecule
//! - `driver` - Progress source (timer or pushed value) feeding the active
//!   interpolator and publishing the resulting [`FrameState`]

pub mod color;
pub mod driver;
pub mod scale;
pub mod slide;
pub mod timing;
pub mod worm;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;

pub use color::ColorParams;
pub use driver::AnimationDriver;
pub use scale::ScaleParams;
pub use slide::SlideParams;
pub use worm::{Edges, WormParams};

/// Transition played when the selected indicator changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationStyle {
    /// Instant switch
    #[default]
    None,
    Color,
    Scale,
    Worm,
    Slide,
}

impl AnimationStyle {
    pub const ALL: [AnimationStyle; 5] = [
        AnimationStyle::None,
        AnimationStyle::Color,
        AnimationStyle::Scale,
        AnimationStyle::Worm,
        AnimationStyle::Slide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationStyle::None => "none",
            AnimationStyle::Color => "color",
            AnimationStyle::Scale => "scale",
            AnimationStyle::Worm => "worm",
            AnimationStyle::Slide => "slide",
        }
    }

    /// The style after this one, wrapping around
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for AnimationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationStyle {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::Error::Config(format!("unknown animation style '{}'", s)))
    }
}

/// Interpolated visual parameters consumed by the renderer
///
/// Each style reads only its own fields: color uses the two colors, scale
/// adds the two radii, worm the capsule edges and slide `slide_x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameState {
    pub color: Color,
    pub color_reverse: Color,
    pub radius: u32,
    pub radius_reverse: u32,
    pub worm_left_x: i32,
    pub worm_right_x: i32,
    pub slide_x: i32,
}

impl FrameState {
    /// Apply one tick's output
    pub fn apply(&mut self, delta: FrameDelta) {
        match delta {
            FrameDelta::Color {
                color,
                color_reverse,
            } => {
                self.color = color;
                self.color_reverse = color_reverse;
            }
            FrameDelta::Scale {
                color,
                color_reverse,
                radius,
                radius_reverse,
            } => {
                self.color = color;
                self.color_reverse = color_reverse;
                self.radius = radius;
                self.radius_reverse = radius_reverse;
            }
            FrameDelta::Worm { left_x, right_x } => {
                self.worm_left_x = left_x;
                self.worm_right_x = right_x;
            }
            FrameDelta::Slide { x } => {
                self.slide_x = x;
            }
        }
    }

    /// Copy with `delta` applied
    pub fn with(mut self, delta: FrameDelta) -> Self {
        self.apply(delta);
        self
    }
}

/// The subset of [`FrameState`] written by one interpolator tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDelta {
    Color {
        color: Color,
        color_reverse: Color,
    },
    Scale {
        color: Color,
        color_reverse: Color,
        radius: u32,
        radius_reverse: u32,
    },
    Worm {
        left_x: i32,
        right_x: i32,
    },
    Slide {
        x: i32,
    },
}

/// Maps a progress value in [0, 1] to the frame fields of one style
pub trait Interpolator {
    fn interpolate(&self, progress: f32) -> FrameDelta;
}

/// Parameters of one transition, tagged by style
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationParams {
    Color(ColorParams),
    Scale(ScaleParams),
    Worm(WormParams),
    Slide(SlideParams),
}

impl AnimationParams {
    pub fn style(&self) -> AnimationStyle {
        match self {
            AnimationParams::Color(_) => AnimationStyle::Color,
            AnimationParams::Scale(_) => AnimationStyle::Scale,
            AnimationParams::Worm(_) => AnimationStyle::Worm,
            AnimationParams::Slide(_) => AnimationStyle::Slide,
        }
    }
}

impl Interpolator for AnimationParams {
    fn interpolate(&self, progress: f32) -> FrameDelta {
        let progress = timing::clamp_progress(progress);
        match self {
            AnimationParams::Color(p) => p.interpolate(progress),
            AnimationParams::Scale(p) => p.interpolate(progress),
            AnimationParams::Worm(p) => p.interpolate(progress),
            AnimationParams::Slide(p) => p.interpolate(progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> FrameState {
        FrameState {
            color: Color::WHITE,
            color_reverse: Color::TRANSPARENT,
            radius: 6,
            radius_reverse: 6,
            worm_left_x: 0,
            worm_right_x: 12,
            slide_x: 6,
        }
    }

    #[test]
    fn test_style_cycle() {
        let mut style = AnimationStyle::None;
        for _ in 0..AnimationStyle::ALL.len() {
            style = style.next();
        }
        assert_eq!(style, AnimationStyle::None);
        assert_eq!(AnimationStyle::Scale.next(), AnimationStyle::Worm);
    }

    #[test]
    fn test_style_parse() {
        assert_eq!("worm".parse::<AnimationStyle>().unwrap(), AnimationStyle::Worm);
        assert_eq!(" Slide ".parse::<AnimationStyle>().unwrap(), AnimationStyle::Slide);
        assert!("bounce".parse::<AnimationStyle>().is_err());
    }

    #[test]
    fn test_apply_touches_only_own_fields() {
        let next = frame().with(FrameDelta::Slide { x: 40 });
        assert_eq!(next.slide_x, 40);
        assert_eq!(next.worm_right_x, 12);
        assert_eq!(next.color, Color::WHITE);

        let next = frame().with(FrameDelta::Worm {
            left_x: 20,
            right_x: 50,
        });
        assert_eq!((next.worm_left_x, next.worm_right_x), (20, 50));
        assert_eq!(next.slide_x, 6);
    }

    #[test]
    fn test_params_clamp_progress() {
        let params = AnimationParams::Slide(SlideParams::new(0, 100));
        assert_eq!(params.interpolate(2.0), FrameDelta::Slide { x: 100 });
        assert_eq!(params.interpolate(-1.0), FrameDelta::Slide { x: 0 });
        assert_eq!(params.style(), AnimationStyle::Slide);
    }
}
