//! Worm: a capsule that stretches from the current indicator to the next
//! one, then contracts onto it.
//!
//! The first half of the progress moves the leading edge (the edge facing
//! the direction of travel) from the source anchor to the target anchor.
//! The second half moves the trailing edge. At progress 0 the capsule
//! covers the source circle, at 0.5 it covers both, at 1 only the target.

use super::timing::lerp_i32;
use super::{FrameDelta, Interpolator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WormParams {
    pub from_x: i32,
    pub to_x: i32,
    pub radius: u32,
    pub moving_right: bool,
}

/// Horizontal bounds of a capsule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edges {
    pub left: i32,
    pub right: i32,
}

impl Edges {
    /// Bounds of a single circle centered at `x`
    ///
    /// A circle that would start left of the canvas is pushed right so the
    /// capsule never renders off-canvas.
    pub fn around(x: i32, radius: u32) -> Self {
        let radius = radius.min(i32::MAX as u32) as i32;
        let left = x.saturating_sub(radius);
        if left >= 0 {
            Self {
                left,
                right: x.saturating_add(radius),
            }
        } else {
            Self {
                left: x,
                right: x.saturating_add(radius.saturating_mul(2)),
            }
        }
    }

    pub fn contains(&self, other: &Edges) -> bool {
        self.left <= other.left && other.right <= self.right
    }
}

impl WormParams {
    pub fn new(from_x: i32, to_x: i32, radius: u32, moving_right: bool) -> Self {
        Self {
            from_x,
            to_x,
            radius,
            moving_right,
        }
    }

    /// Parameters for a transition between two centers, direction inferred
    pub fn between(from_x: i32, to_x: i32, radius: u32) -> Self {
        Self::new(from_x, to_x, radius, to_x > from_x)
    }

    pub fn from_edges(&self) -> Edges {
        Edges::around(self.from_x, self.radius)
    }

    pub fn to_edges(&self) -> Edges {
        Edges::around(self.to_x, self.radius)
    }

    /// Capsule bounds at `progress`
    pub fn edges(&self, progress: f32) -> Edges {
        let from = self.from_edges();
        let to = self.to_edges();

        let lead = (progress * 2.0).clamp(0.0, 1.0);
        let trail = (progress * 2.0 - 1.0).clamp(0.0, 1.0);

        let (left_t, right_t) = if self.moving_right {
            (trail, lead)
        } else {
            (lead, trail)
        };

        let left = lerp_i32(from.left, to.left, left_t);
        let right = lerp_i32(from.right, to.right, right_t);

        // Only reachable with a direction flag that disagrees with the
        // anchors; keep the capsule well-formed anyway.
        if left > right {
            Edges {
                left: right,
                right: left,
            }
        } else {
            Edges { left, right }
        }
    }
}

impl Interpolator for WormParams {
    fn interpolate(&self, progress: f32) -> FrameDelta {
        let edges = self.edges(progress);
        FrameDelta::Worm {
            left_x: edges.left,
            right_x: edges.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_shift_off_canvas() {
        assert_eq!(Edges::around(10, 6), Edges { left: 4, right: 16 });
        assert_eq!(Edges::around(3, 6), Edges { left: 3, right: 15 });
    }

    #[test]
    fn test_boundaries_moving_right() {
        let p = WormParams::between(30, 70, 6);
        assert!(p.moving_right);
        assert_eq!(p.edges(0.0), p.from_edges());
        assert_eq!(p.edges(1.0), p.to_edges());
    }

    #[test]
    fn test_boundaries_moving_left() {
        let p = WormParams::between(70, 30, 6);
        assert!(!p.moving_right);
        assert_eq!(p.edges(0.0), Edges { left: 64, right: 76 });
        assert_eq!(p.edges(1.0), Edges { left: 24, right: 36 });
    }

    #[test]
    fn test_stretch_then_contract() {
        let p = WormParams::between(30, 70, 6);
        // Halfway the capsule spans both anchors
        let mid = p.edges(0.5);
        assert!(mid.contains(&p.from_edges()));
        assert!(mid.contains(&p.to_edges()));
        // Leading edge moves first, trailing edge stays
        let early = p.edges(0.25);
        assert_eq!(early.left, 24);
        assert_eq!(early.right, 56);
        // Trailing edge catches up afterwards
        let late = p.edges(0.75);
        assert_eq!(late.left, 44);
        assert_eq!(late.right, 76);
    }

    #[test]
    fn test_left_never_exceeds_right() {
        for (from, to) in [(30, 70), (70, 30), (6, 200), (50, 50)] {
            let p = WormParams::between(from, to, 6);
            let mut prev = p.edges(0.0);
            for i in 0..=100 {
                let e = p.edges(i as f32 / 100.0);
                assert!(e.left <= e.right, "from={} to={} i={}", from, to, i);
                // Each edge moves monotonically toward its target
                if to >= from {
                    assert!(e.left >= prev.left && e.right >= prev.right);
                } else {
                    assert!(e.left <= prev.left && e.right <= prev.right);
                }
                prev = e;
            }
        }
    }

    #[test]
    fn test_delta() {
        let p = WormParams::between(30, 70, 6);
        assert_eq!(
            p.interpolate(1.0),
            FrameDelta::Worm {
                left_x: 64,
                right_x: 76
            }
        );
    }
}
