//! Atomic Layer: swipe curves
//!
//! A swipe curve says how far through its travel a page swipe is after a
//! share of the swipe duration, and turns that into a scroll position in
//! pages.

use pagedots_core::animation::timing::lerp;
pub use pagedots_core::EasingType;

/// Scroll position along a page swipe
pub trait SwipeCurve {
    /// Share of the swipe distance covered after `t` of the duration
    fn covered(&self, t: f32) -> f32;

    /// Scroll position in pages, `t` of the way through a swipe from `from` to `to`
    ///
    /// Lands exactly on `to` once `t` reaches 1 so the pager settles on a
    /// whole page.
    fn position(&self, from: f32, to: f32, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return to;
        }
        lerp(from, to, self.covered(t))
    }
}

impl SwipeCurve for EasingType {
    fn covered(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            // Jump straight to the page at the end of the swipe
            EasingType::None if t < 1.0 => 0.0,
            EasingType::None => 1.0,
            EasingType::Linear => t,
            EasingType::Cubic => decelerate(t, 3),
            EasingType::Quintic => decelerate(t, 5),
            EasingType::EaseOut if t >= 1.0 => 1.0,
            EasingType::EaseOut => 1.0 - (-10.0 * t).exp2(),
        }
    }
}

/// `1 - (1 - t)^power`: fast off the finger, settling onto the page
#[inline]
fn decelerate(t: f32, power: i32) -> f32 {
    1.0 - (1.0 - t).powi(power)
}
