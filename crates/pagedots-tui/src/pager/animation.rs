//! Molecular Layer: Pager controller
//!
//! Keeps a continuous scroll position measured in pages and animates it
//! toward a target page. Every update reports the pair of pages on screen
//! the way a paged view does: the left page index plus how far it has
//! scrolled toward the next one.

use std::time::{Duration, Instant};

use pagedots_core::animation::timing::progress_at;
use pagedots_core::PagerConfig;

use super::easing::{EasingType, SwipeCurve};

/// Event emitted by the pager
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PagerEvent {
    /// The page at `position` is scrolled `offset` of the way to the next page
    Scrolled { position: usize, offset: f32 },
    /// A swipe committed to a new page
    PageSelected(usize),
}

/// Active swipe state
#[derive(Debug, Clone, Copy)]
struct ActiveSwipe {
    /// Swipe start time
    start: Instant,
    /// Starting scroll position in pages
    from: f32,
    /// Target page
    to: f32,
    /// Swipe duration
    duration: Duration,
    /// Easing function
    easing: EasingType,
}

/// Paged container simulation
///
/// Call `swipe_to()` (or `next()` / `previous()`) to begin a swipe, then
/// `update()` each frame to collect the events produced since the last one.
#[derive(Debug, Clone)]
pub struct Pager {
    page_count: usize,
    /// Current scroll position in pages (always up-to-date)
    position: f32,
    /// Page the pager is heading to or resting on
    target: usize,
    swipe: Option<ActiveSwipe>,
    config: PagerConfig,
    /// Events queued since the last update
    pending: Vec<PagerEvent>,
}

impl Pager {
    pub fn new(page_count: usize, config: PagerConfig) -> Self {
        Self {
            page_count,
            position: 0.0,
            target: 0,
            swipe: None,
            config,
            pending: Vec::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Change the number of pages, keeping the pager inside them
    pub fn set_page_count(&mut self, page_count: usize) {
        self.page_count = page_count;
        let last = self.last_page();
        if self.target > last {
            self.set_current(last);
        }
    }

    /// Page the pager is resting on or heading to
    #[inline]
    pub fn current_page(&self) -> usize {
        self.target
    }

    /// Continuous scroll position in pages
    #[inline]
    pub fn scroll_position(&self) -> f32 {
        self.position
    }

    /// Check if a swipe is in progress
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.swipe.is_some()
    }

    /// Move to `page` immediately without emitting events
    pub fn set_current(&mut self, page: usize) {
        let page = page.min(self.last_page());
        self.swipe = None;
        self.target = page;
        self.position = page as f32;
    }

    /// Swipe to the next page
    pub fn next(&mut self) {
        self.swipe_to(self.target.saturating_add(1));
    }

    /// Swipe to the previous page
    pub fn previous(&mut self) {
        self.swipe_to(self.target.saturating_sub(1));
    }

    pub fn swipe_to(&mut self, page: usize) {
        self.swipe_to_at(page, Instant::now());
    }

    /// Start a swipe toward `page` at `now`
    ///
    /// The page is reported as selected right away, as a paged view does
    /// when the user releases a drag; scroll events follow on each update.
    pub fn swipe_to_at(&mut self, page: usize, now: Instant) {
        if self.page_count == 0 {
            return;
        }
        let page = page.min(self.last_page());
        if page == self.target {
            return;
        }

        tracing::trace!("Swipe from {:.2} to page {}", self.position, page);
        self.target = page;
        self.pending.push(PagerEvent::PageSelected(page));

        if self.config.swipe_duration_ms == 0 || self.config.easing == EasingType::None {
            self.swipe = None;
            self.position = page as f32;
            self.pending.push(self.scrolled());
            return;
        }

        self.swipe = Some(ActiveSwipe {
            start: now,
            from: self.position,
            to: page as f32,
            duration: Duration::from_millis(self.config.swipe_duration_ms),
            easing: self.config.easing,
        });
    }

    pub fn update(&mut self) -> Vec<PagerEvent> {
        self.update_at(Instant::now())
    }

    /// Advance the swipe to `now` and drain the queued events
    pub fn update_at(&mut self, now: Instant) -> Vec<PagerEvent> {
        if let Some(swipe) = self.swipe {
            let t = progress_at(swipe.start, swipe.duration, now);
            if t >= 1.0 {
                // Swipe complete
                self.position = swipe.to;
                self.swipe = None;
            } else {
                self.position = swipe.easing.position(swipe.from, swipe.to, t);
            }
            self.pending.push(self.scrolled());
        }

        std::mem::take(&mut self.pending)
    }

    fn last_page(&self) -> usize {
        self.page_count.saturating_sub(1)
    }

    fn scrolled(&self) -> PagerEvent {
        let position = self.position.max(0.0);
        let page = position.floor();
        PagerEvent::Scrolled {
            position: page as usize,
            offset: position - page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(easing: EasingType) -> Pager {
        Pager::new(
            4,
            PagerConfig {
                swipe_duration_ms: 100,
                easing,
                animation_fps: 60,
            },
        )
    }

    #[test]
    fn test_swipe_reports_selection_then_scroll() {
        let mut pager = pager(EasingType::Linear);
        let start = Instant::now();
        pager.swipe_to_at(1, start);
        assert!(pager.is_animating());

        let events = pager.update_at(start + Duration::from_millis(50));
        assert_eq!(events[0], PagerEvent::PageSelected(1));
        match events[1] {
            PagerEvent::Scrolled { position, offset } => {
                assert_eq!(position, 0);
                assert!((offset - 0.5).abs() < 0.01);
            }
            other => panic!("unexpected event {:?}", other),
        }

        let events = pager.update_at(start + Duration::from_millis(200));
        assert_eq!(
            events,
            vec![PagerEvent::Scrolled {
                position: 1,
                offset: 0.0
            }]
        );
        assert!(!pager.is_animating());
        assert!(pager.update_at(start + Duration::from_millis(300)).is_empty());
    }

    #[test]
    fn test_backward_swipe_reports_left_page() {
        let mut pager = pager(EasingType::Linear);
        pager.set_current(2);
        let start = Instant::now();
        pager.swipe_to_at(1, start);
        let events = pager.update_at(start + Duration::from_millis(25));
        match events[1] {
            PagerEvent::Scrolled { position, offset } => {
                assert_eq!(position, 1);
                assert!((offset - 0.75).abs() < 0.01);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_swipe_clamps_to_pages() {
        let mut pager = pager(EasingType::Cubic);
        pager.set_current(3);
        pager.next();
        assert!(!pager.is_animating());
        assert!(pager.update().is_empty());
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn test_instant_swipe_without_easing() {
        let mut pager = pager(EasingType::None);
        pager.swipe_to(2);
        assert!(!pager.is_animating());
        assert_eq!(
            pager.update(),
            vec![
                PagerEvent::PageSelected(2),
                PagerEvent::Scrolled {
                    position: 2,
                    offset: 0.0
                }
            ]
        );
    }

    #[test]
    fn test_shrinking_page_count_moves_pager() {
        let mut pager = pager(EasingType::Linear);
        pager.set_current(3);
        pager.set_page_count(2);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.scroll_position(), 1.0);
    }
}
