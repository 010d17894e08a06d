//! Renderer: turns indicator state into drawing calls
//!
//! The host supplies the drawing primitives through [`IndicatorCanvas`].
//! Indicators outside the transition are static circles; the active ones are
//! drawn from the current frame according to the animation style. Overlays
//! (the worm capsule and the sliding dot) are drawn after every static
//! circle so they are never covered by a neighbour.

use crate::animation::AnimationStyle;
use crate::color::Color;
use crate::indicator::PageIndicator;

/// Axis-aligned rectangle in view pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Drawing primitives consumed by [`render`]
pub trait IndicatorCanvas {
    fn draw_circle(&mut self, x: i32, y: i32, radius: u32, color: Color);

    fn draw_round_rect(&mut self, rect: Rect, corner_radius: u32, color: Color);
}

/// Draw every indicator of `indicator` onto `canvas`
pub fn render<C>(indicator: &PageIndicator, canvas: &mut C)
where
    C: IndicatorCanvas + ?Sized,
{
    let state = indicator.selection_state();
    let frame = indicator.frame();
    let y = indicator.y_coordinate();
    let radius = indicator.radius();
    let unselected = indicator.unselected_color();
    let selected = indicator.selected_color();

    for position in 0..indicator.count() {
        let x = indicator.x_coordinate(position);
        let active = state.is_active(position);
        let incoming = position == state.incoming();

        match state.style {
            AnimationStyle::Color if active => {
                let color = if incoming {
                    frame.color
                } else {
                    frame.color_reverse
                };
                canvas.draw_circle(x, y, radius, color);
            }
            AnimationStyle::Scale if active => {
                let (color, r) = if incoming {
                    (frame.color, frame.radius)
                } else {
                    (frame.color_reverse, frame.radius_reverse)
                };
                canvas.draw_circle(x, y, r, color);
            }
            // The moving shape is an overlay; the row underneath stays static
            AnimationStyle::Worm | AnimationStyle::Slide => {
                canvas.draw_circle(x, y, radius, unselected);
            }
            _ => {
                let color = if position == state.selected {
                    selected
                } else {
                    unselected
                };
                canvas.draw_circle(x, y, indicator.unselected_radius(), color);
            }
        }
    }

    if indicator.count() == 0 {
        return;
    }

    match state.style {
        AnimationStyle::Worm => {
            let r = radius as i32;
            let rect = Rect {
                left: frame.worm_left_x,
                top: y - r,
                right: frame.worm_right_x,
                bottom: y + r,
            };
            canvas.draw_round_rect(rect, radius, selected);
        }
        AnimationStyle::Slide => {
            canvas.draw_circle(frame.slide_x, y, radius, selected);
        }
        _ => {}
    }
}
