//! Animation driver: the single progress source for the indicator
//!
//! Timed runs are advanced by the host calling `tick()` once per frame;
//! interactive progress is pushed with `progress()` and published
//! synchronously. Both paths go through the same interpolators, so a timed
//! run and a scroll-driven transition look identical at equal progress.

use std::time::{Duration, Instant};

use super::timing::progress_at;
use super::{AnimationParams, AnimationStyle, FrameState, Interpolator};

/// Timed run in flight
#[derive(Debug, Clone, Copy)]
struct ActiveRun {
    /// Animation start time
    start: Instant,
    /// Animation duration
    duration: Duration,
    /// Transition being played
    params: AnimationParams,
}

/// Owns the frame state and the (at most one) active timed run
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    run: Option<ActiveRun>,
    frame: FrameState,
}

impl AnimationDriver {
    pub fn new(frame: FrameState) -> Self {
        Self { run: None, frame }
    }

    /// Latest published frame
    #[inline]
    pub fn frame(&self) -> &FrameState {
        &self.frame
    }

    /// Check if a timed run is in flight
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Parameters of the timed run in flight, if any
    pub fn active_params(&self) -> Option<&AnimationParams> {
        self.run.as_ref().map(|run| &run.params)
    }

    /// Drop any run and publish `frame` as is
    pub fn reset(&mut self, frame: FrameState) {
        self.run = None;
        self.frame = frame;
    }

    /// Swap the parameters of the timed run in flight, keeping its clock
    ///
    /// Returns false when no run is in flight.
    pub fn retarget(&mut self, params: AnimationParams) -> bool {
        match self.run.as_mut() {
            Some(run) => {
                run.params = params;
                true
            }
            None => false,
        }
    }

    /// Cancel the timed run, keeping the last published frame
    pub fn cancel(&mut self) {
        self.run = None;
    }

    /// Start a timed run now
    pub fn start(&mut self, params: AnimationParams, duration: Duration) {
        self.start_at(params, duration, Instant::now());
    }

    /// Start a timed run at `now`, superseding the current one
    ///
    /// A superseded worm run is first driven to its end so two capsules
    /// never blend into one frame. The first frame of the new run is
    /// published immediately.
    pub fn start_at(&mut self, params: AnimationParams, duration: Duration, now: Instant) {
        if let Some(previous) = self.run.take() {
            if previous.params.style() == AnimationStyle::Worm {
                self.frame.apply(previous.params.interpolate(1.0));
            }
            tracing::trace!("Superseded {} run", previous.params.style());
        }

        tracing::debug!(
            "Starting {} run for {}ms",
            params.style(),
            duration.as_millis()
        );

        self.run = Some(ActiveRun {
            start: now,
            duration,
            params,
        });
        self.tick_at(now);
    }

    /// Advance the timed run to the current time
    ///
    /// Returns true when a new frame was published.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Advance the timed run to `now`
    pub fn tick_at(&mut self, now: Instant) -> bool {
        let Some(run) = self.run else {
            return false;
        };

        let progress = progress_at(run.start, run.duration, now);
        self.frame = self.frame.with(run.params.interpolate(progress));

        if progress >= 1.0 {
            // Animation complete
            self.run = None;
        }
        true
    }

    /// Publish the frame for an externally driven `progress`
    ///
    /// Cancels any timed run so the two sources never fight over the frame.
    pub fn progress(&mut self, params: AnimationParams, progress: f32) {
        self.run = None;
        self.frame = self.frame.with(params.interpolate(progress));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{ColorParams, SlideParams, WormParams};
    use crate::color::Color;

    fn frame() -> FrameState {
        FrameState {
            color: Color::WHITE,
            color_reverse: Color::TRANSPARENT,
            radius: 6,
            radius_reverse: 6,
            worm_left_x: 24,
            worm_right_x: 36,
            slide_x: 30,
        }
    }

    fn slide(from: i32, to: i32) -> AnimationParams {
        AnimationParams::Slide(SlideParams::new(from, to))
    }

    #[test]
    fn test_timed_run_progresses_and_completes() {
        let mut driver = AnimationDriver::new(frame());
        let start = Instant::now();
        driver.start_at(slide(30, 70), Duration::from_millis(100), start);

        assert!(driver.is_animating());
        assert_eq!(driver.frame().slide_x, 30);

        assert!(driver.tick_at(start + Duration::from_millis(50)));
        assert_eq!(driver.frame().slide_x, 50);

        assert!(driver.tick_at(start + Duration::from_millis(250)));
        assert_eq!(driver.frame().slide_x, 70);
        assert!(!driver.is_animating());

        // Nothing left to advance
        assert!(!driver.tick_at(start + Duration::from_millis(300)));
    }

    #[test]
    fn test_progress_is_monotonic_over_ticks() {
        let mut driver = AnimationDriver::new(frame());
        let start = Instant::now();
        driver.start_at(slide(0, 1000), Duration::from_millis(160), start);
        let mut prev = driver.frame().slide_x;
        for ms in (0..=200).step_by(16) {
            driver.tick_at(start + Duration::from_millis(ms));
            assert!(driver.frame().slide_x >= prev);
            prev = driver.frame().slide_x;
        }
        assert_eq!(prev, 1000);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut driver = AnimationDriver::new(frame());
        driver.start_at(slide(30, 70), Duration::ZERO, Instant::now());
        assert!(!driver.is_animating());
        assert_eq!(driver.frame().slide_x, 70);
    }

    #[test]
    fn test_new_run_supersedes_old() {
        let mut driver = AnimationDriver::new(frame());
        let start = Instant::now();
        driver.start_at(slide(30, 70), Duration::from_millis(100), start);
        driver.start_at(slide(70, 110), Duration::from_millis(100), start);

        assert_eq!(driver.frame().slide_x, 70);
        driver.tick_at(start + Duration::from_millis(100));
        assert_eq!(driver.frame().slide_x, 110);
    }

    #[test]
    fn test_superseded_worm_is_finished_first() {
        let mut driver = AnimationDriver::new(frame());
        let start = Instant::now();
        let first = AnimationParams::Worm(WormParams::between(30, 70, 6));
        driver.start_at(first, Duration::from_millis(100), start);
        driver.tick_at(start + Duration::from_millis(30));

        // The new run starts from the far anchor, so its first frame is that
        // anchor's circle rather than a stale stretched capsule.
        let second = AnimationParams::Worm(WormParams::between(70, 110, 6));
        driver.start_at(second, Duration::from_millis(100), start + Duration::from_millis(30));
        assert_eq!(driver.frame().worm_left_x, 64);
        assert_eq!(driver.frame().worm_right_x, 76);
    }

    #[test]
    fn test_pushed_progress_cancels_timer() {
        let mut driver = AnimationDriver::new(frame());
        let start = Instant::now();
        driver.start_at(slide(30, 70), Duration::from_millis(100), start);

        let params = AnimationParams::Color(ColorParams::new(Color::TRANSPARENT, Color::WHITE));
        driver.progress(params, 1.0);
        assert!(!driver.is_animating());
        assert_eq!(driver.frame().color, Color::WHITE);
        assert_eq!(driver.frame().color_reverse, Color::TRANSPARENT);
        // The slide field keeps its last published value
        assert_eq!(driver.frame().slide_x, 30);
    }

    #[test]
    fn test_retarget_keeps_clock() {
        let mut driver = AnimationDriver::new(frame());
        let start = Instant::now();
        driver.start_at(slide(30, 70), Duration::from_millis(100), start);
        driver.tick_at(start + Duration::from_millis(50));

        assert!(driver.retarget(slide(60, 140)));
        driver.tick_at(start + Duration::from_millis(75));
        assert_eq!(driver.frame().slide_x, 120);
        driver.tick_at(start + Duration::from_millis(100));
        assert_eq!(driver.frame().slide_x, 140);

        assert!(!driver.retarget(slide(0, 10)));
        assert_eq!(driver.frame().slide_x, 140);
    }

    #[test]
    fn test_reset() {
        let mut driver = AnimationDriver::new(frame());
        driver.start(slide(30, 70), Duration::from_secs(10));
        let mut rest = frame();
        rest.slide_x = 90;
        driver.reset(rest);
        assert!(!driver.is_animating());
        assert_eq!(driver.frame().slide_x, 90);
    }
}
