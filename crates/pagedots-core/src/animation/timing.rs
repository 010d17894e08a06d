//! Time and interpolation helpers shared by the animation driver and the
//! interpolators.

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) at `now`
///
/// # Arguments
/// * `start` - Animation start time
/// * `duration` - Total animation duration
/// * `now` - Time of the current tick
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress_at(start: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0) as f32
}

/// Clamp a progress value into [0, 1], mapping NaN to 0
#[inline]
pub fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Linear interpolation for pixel coordinates
///
/// Exact at both ends: `t == 0` yields `from`, `t == 1` yields `to`.
#[inline]
pub fn lerp_i32(from: i32, to: i32, t: f32) -> i32 {
    let t = clamp_progress(t);
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    let delta = (to as f64 - from as f64) * t as f64;
    (from as f64 + delta).round() as i32
}

/// Linear interpolation for radii
#[inline]
pub fn lerp_u32(from: u32, to: u32, t: f32) -> u32 {
    lerp_i32(from as i32, to as i32, t).max(0) as u32
}
