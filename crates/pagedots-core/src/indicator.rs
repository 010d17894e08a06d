//! Selection state machine for the indicator row
//!
//! `PageIndicator` owns the layout inputs, the selection state and the
//! animation driver. Selection changes arrive either as discrete `select()`
//! calls, which start a timed run, or as `on_scroll()` events from a pager,
//! which push progress directly when interactive mode is on.

use std::time::{Duration, Instant};

use crate::animation::scale::{clamp_scale_factor, unselected_radius};
use crate::animation::timing::clamp_progress;
use crate::animation::{
    AnimationDriver, AnimationParams, AnimationStyle, ColorParams, Edges, FrameState,
    ScaleParams, SlideParams, WormParams,
};
use crate::color::Color;
use crate::config::{IndicatorConfig, MAX_RADIUS};
use crate::layout::{self, LayoutConfig, MeasureSpec};

/// Which indicators are involved in the current transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub selected: usize,
    pub selecting: usize,
    pub last_selected: usize,
    pub interactive: bool,
    pub style: AnimationStyle,
}

impl SelectionState {
    /// Index receiving the selection in the current transition
    pub fn incoming(&self) -> usize {
        if self.interactive {
            self.selecting
        } else {
            self.selected
        }
    }

    /// Index giving the selection away in the current transition
    pub fn outgoing(&self) -> usize {
        if self.interactive {
            self.selected
        } else {
            self.last_selected
        }
    }

    /// Whether `position` is drawn from the frame state
    pub fn is_active(&self, position: usize) -> bool {
        position == self.incoming() || position == self.outgoing()
    }
}

/// A row of page indicators with animated selection
#[derive(Debug, Clone)]
pub struct PageIndicator {
    count: usize,
    radius: u32,
    padding: u32,
    view_width: u32,
    view_height: u32,
    scale_factor: f32,
    unselected_color: Color,
    selected_color: Color,
    animation_duration: Duration,
    selection: SelectionState,
    driver: AnimationDriver,
    redraw: bool,
}

impl Default for PageIndicator {
    fn default() -> Self {
        Self::new(&IndicatorConfig::default())
    }
}

impl PageIndicator {
    pub fn new(config: &IndicatorConfig) -> Self {
        let config = config.sanitized();
        let selected = config.selected();
        let mut indicator = Self {
            count: config.count(),
            radius: config.radius,
            padding: config.padding,
            view_width: 0,
            view_height: 0,
            scale_factor: config.scale_factor(),
            unselected_color: config.unselected_color,
            selected_color: config.selected_color,
            animation_duration: config.animation_duration(),
            selection: SelectionState {
                selected,
                selecting: selected,
                last_selected: selected,
                interactive: config.interactive,
                style: config.style,
            },
            driver: AnimationDriver::new(FrameState {
                color: config.selected_color,
                color_reverse: config.unselected_color,
                radius: config.radius,
                radius_reverse: config.radius,
                worm_left_x: 0,
                worm_right_x: 0,
                slide_x: 0,
            }),
            redraw: true,
        };
        indicator.reset_frame();
        indicator
    }

    // --- Layout -----------------------------------------------------------

    /// Layout inputs of the current pass
    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig::new(self.count, self.radius, self.padding, self.view_width)
    }

    /// Center x of the indicator at `position`
    pub fn x_coordinate(&self, position: usize) -> i32 {
        self.layout().x_coordinate(position)
    }

    /// Vertical center of the row
    pub fn y_coordinate(&self) -> i32 {
        (self.view_height / 2) as i32
    }

    /// Resolve the row's size against the host's measure specs
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> (u32, u32) {
        layout::measure(&self.layout(), width, height)
    }

    /// Record the measured view size used for layout
    pub fn set_view_size(&mut self, width: u32, height: u32) {
        if (width, height) == (self.view_width, self.view_height) {
            return;
        }
        self.view_width = width;
        self.view_height = height;
        self.layout_changed();
    }

    pub fn view_size(&self) -> (u32, u32) {
        (self.view_width, self.view_height)
    }

    // --- Configuration ----------------------------------------------------

    pub fn count(&self) -> usize {
        self.count
    }

    /// Set the number of indicators, keeping the selection inside the row
    pub fn set_count(&mut self, count: usize) {
        if count == self.count {
            return;
        }
        self.count = count;
        let last = self.last_index();
        let s = &mut self.selection;
        s.selected = s.selected.min(last);
        s.selecting = s.selecting.min(last);
        s.last_selected = s.last_selected.min(last);
        self.layout_changed();
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Set the indicator radius in pixels; zero is ignored
    pub fn set_radius(&mut self, radius: u32) {
        if radius == 0 {
            tracing::warn!("Ignoring zero indicator radius");
            return;
        }
        self.radius = radius.min(MAX_RADIUS);
        self.layout_changed();
    }

    pub fn padding(&self) -> u32 {
        self.padding
    }

    pub fn set_padding(&mut self, padding: u32) {
        self.padding = padding;
        self.layout_changed();
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    pub fn set_scale_factor(&mut self, factor: f32) {
        self.scale_factor = clamp_scale_factor(factor);
        self.layout_changed();
    }

    /// Radius of indicators outside the transition
    pub fn unselected_radius(&self) -> u32 {
        if self.selection.style == AnimationStyle::Scale {
            unselected_radius(self.radius, self.scale_factor)
        } else {
            self.radius
        }
    }

    pub fn unselected_color(&self) -> Color {
        self.unselected_color
    }

    pub fn set_unselected_color(&mut self, color: Color) {
        self.unselected_color = color;
        self.layout_changed();
    }

    pub fn selected_color(&self) -> Color {
        self.selected_color
    }

    pub fn set_selected_color(&mut self, color: Color) {
        self.selected_color = color;
        self.layout_changed();
    }

    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    /// Duration of timed runs started from now on
    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.animation_duration = duration;
    }

    pub fn animation_style(&self) -> AnimationStyle {
        self.selection.style
    }

    pub fn set_animation_style(&mut self, style: AnimationStyle) {
        if style == self.selection.style {
            return;
        }
        self.selection.style = style;
        // The old transition no longer applies; only the selection stays active
        self.selection.selecting = self.selection.selected;
        self.selection.last_selected = self.selection.selected;
        self.reset_frame();
        self.redraw = true;
    }

    pub fn is_interactive(&self) -> bool {
        self.selection.interactive
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        if interactive == self.selection.interactive {
            return;
        }
        self.selection.interactive = interactive;
        self.selection.selecting = self.selection.selected;
        self.selection.last_selected = self.selection.selected;
        self.reset_frame();
        self.redraw = true;
    }

    // --- Selection --------------------------------------------------------

    /// Currently selected indicator
    pub fn selection(&self) -> usize {
        self.selection.selected
    }

    pub fn selection_state(&self) -> &SelectionState {
        &self.selection
    }

    /// Latest published frame
    pub fn frame(&self) -> &FrameState {
        self.driver.frame()
    }

    /// Select `position` with a timed transition
    ///
    /// Out-of-range positions clamp into the row. Ignored while interactive
    /// animation is on, since the pager already drives the frame, and when
    /// `position` is already selected.
    pub fn select(&mut self, position: i64) {
        self.select_at(position, Instant::now());
    }

    /// Like [`select`](Self::select) with an explicit start time
    pub fn select_at(&mut self, position: i64, now: Instant) {
        if self.selection.interactive && self.selection.style != AnimationStyle::None {
            tracing::trace!("Ignoring select({}) in interactive mode", position);
            return;
        }

        let position = self.clamp_position(position);
        if position == self.selection.selected {
            return;
        }

        self.selection.last_selected = self.selection.selected;
        self.selection.selected = position;
        self.selection.selecting = position;
        tracing::debug!(
            "Selected indicator {} (was {})",
            position,
            self.selection.last_selected
        );

        if let Some(params) = self.timed_params() {
            self.driver.start_at(params, self.animation_duration, now);
        }
        self.redraw = true;
    }

    /// Feed one page-scroll event from the pager
    ///
    /// `offset` is how far the page at `position` has scrolled toward
    /// `position + 1`. Ignored unless interactive mode is on.
    pub fn on_scroll(&mut self, position: usize, offset: f32) {
        if !self.selection.interactive || self.count == 0 {
            return;
        }

        let position = position.min(self.last_index());
        let offset = clamp_progress(offset);
        let (target, progress) = self.scroll_progress(position, offset);

        if progress >= 1.0 {
            self.selection.last_selected = self.selection.selected;
            self.selection.selected = target;
            tracing::debug!("Scroll settled on indicator {}", target);
        }

        self.set_progress(target, progress);
    }

    /// Push interactive progress toward `selecting`
    ///
    /// Ignored unless interactive mode is on.
    pub fn set_progress(&mut self, selecting: usize, progress: f32) {
        if !self.selection.interactive || self.count == 0 {
            return;
        }

        self.selection.selecting = selecting.min(self.last_index());
        let progress = clamp_progress(progress);
        tracing::trace!(
            "Progress {:.3} toward indicator {}",
            progress,
            self.selection.selecting
        );

        if let Some(params) = self.interactive_params() {
            self.driver.progress(params, progress);
        }
        self.redraw = true;
    }

    /// Infer the transition target and its progress from a scroll event
    ///
    /// The pager reports the left page of the pair being shown and how far
    /// it has scrolled; direction is inferred relative to the committed
    /// selection. A position that already passed the selection snaps it.
    fn scroll_progress(&mut self, position: usize, offset: f32) -> (usize, f32) {
        let selected = self.selection.selected;
        let right_overscrolled = position > selected;
        let left_overscrolled = position + 1 < selected;

        if right_overscrolled || left_overscrolled {
            self.selection.selected = position;
        }

        let (target, progress) = if self.selection.selected == position && offset != 0.0 {
            (position + 1, offset)
        } else {
            (position, 1.0 - offset)
        };

        (target.min(self.last_index()), clamp_progress(progress))
    }

    // --- Animation --------------------------------------------------------

    /// Advance the timed run; returns true when a new frame was published
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        let advanced = self.driver.tick_at(now);
        self.redraw |= advanced;
        advanced
    }

    /// Whether a timed run needs further ticks
    pub fn needs_tick(&self) -> bool {
        self.driver.is_animating()
    }

    /// Take the pending redraw request
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    // --- Internals --------------------------------------------------------

    fn last_index(&self) -> usize {
        self.count.saturating_sub(1)
    }

    fn clamp_position(&self, position: i64) -> usize {
        position.clamp(0, self.last_index() as i64) as usize
    }

    /// Parameters of a timed run from `last_selected` to `selected`
    fn timed_params(&self) -> Option<AnimationParams> {
        let from = self.selection.last_selected;
        let to = self.selection.selected;
        self.transition_params(from, to)
    }

    /// Parameters of the interactive transition from `selected` to `selecting`
    fn interactive_params(&self) -> Option<AnimationParams> {
        let from = self.selection.selected;
        let to = self.selection.selecting;
        self.transition_params(from, to)
    }

    fn transition_params(&self, from: usize, to: usize) -> Option<AnimationParams> {
        let params = match self.selection.style {
            AnimationStyle::None => return None,
            AnimationStyle::Color => AnimationParams::Color(ColorParams::new(
                self.unselected_color,
                self.selected_color,
            )),
            AnimationStyle::Scale => AnimationParams::Scale(ScaleParams::new(
                self.unselected_color,
                self.selected_color,
                self.radius,
                self.scale_factor,
            )),
            AnimationStyle::Worm => AnimationParams::Worm(WormParams::new(
                self.x_coordinate(from),
                self.x_coordinate(to),
                self.radius,
                to > from,
            )),
            AnimationStyle::Slide => AnimationParams::Slide(SlideParams::new(
                self.x_coordinate(from),
                self.x_coordinate(to),
            )),
        };
        Some(params)
    }

    /// Frame showing the current selection at rest
    fn resting_frame(&self) -> FrameState {
        let x = self.x_coordinate(self.selection.selected);
        let edges = Edges::around(x, self.radius);
        FrameState {
            color: self.selected_color,
            color_reverse: self.unselected_color,
            radius: self.radius,
            radius_reverse: self.radius,
            worm_left_x: edges.left,
            worm_right_x: edges.right,
            slide_x: x,
        }
    }

    fn reset_frame(&mut self) {
        self.driver.reset(self.resting_frame());
    }

    /// Layout inputs changed
    ///
    /// A timed run in flight keeps its clock but is retargeted at the new
    /// geometry and colors; otherwise the frame rests at the selection.
    fn layout_changed(&mut self) {
        let retargeted = match self.timed_params() {
            Some(params) if self.driver.is_animating() => self.driver.retarget(params),
            _ => false,
        };
        if !retargeted {
            self.reset_frame();
        }
        self.redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicator(count: i64, style: AnimationStyle, interactive: bool) -> PageIndicator {
        let mut indicator = PageIndicator::new(&IndicatorConfig {
            count,
            style,
            interactive,
            animation_duration_ms: 100,
            ..Default::default()
        });
        indicator.set_view_size(200, 20);
        indicator
    }

    #[test]
    fn test_select_clamps() {
        let mut ind = indicator(4, AnimationStyle::None, false);
        ind.select(99);
        assert_eq!(ind.selection(), 3);
        ind.select(-5);
        assert_eq!(ind.selection(), 0);
        assert_eq!(ind.selection_state().last_selected, 3);
    }

    #[test]
    fn test_select_rejected_in_interactive_mode() {
        let mut ind = indicator(4, AnimationStyle::Slide, true);
        let before = *ind.selection_state();
        let frame = *ind.frame();
        ind.select(2);
        assert_eq!(*ind.selection_state(), before);
        assert_eq!(*ind.frame(), frame);
        assert!(!ind.needs_tick());
    }

    #[test]
    fn test_select_allowed_in_interactive_mode_without_style() {
        let mut ind = indicator(4, AnimationStyle::None, true);
        ind.select(2);
        assert_eq!(ind.selection(), 2);
    }

    #[test]
    fn test_repeated_select_does_not_restart() {
        let mut ind = indicator(4, AnimationStyle::Slide, false);
        let start = Instant::now();
        ind.select_at(2, start);
        ind.tick_at(start + Duration::from_millis(50));
        let mid = ind.frame().slide_x;

        ind.select_at(2, start + Duration::from_millis(50));
        assert_eq!(ind.frame().slide_x, mid);
        assert_eq!(ind.selection_state().last_selected, 0);

        ind.tick_at(start + Duration::from_millis(100));
        assert_eq!(ind.frame().slide_x, ind.x_coordinate(2));
    }

    #[test]
    fn test_timed_slide_runs_between_positions() {
        let mut ind = indicator(3, AnimationStyle::Slide, false);
        let start = Instant::now();
        ind.select_at(2, start);
        assert!(ind.needs_tick());
        assert_eq!(ind.frame().slide_x, ind.x_coordinate(0));

        ind.tick_at(start + Duration::from_millis(100));
        assert_eq!(ind.frame().slide_x, ind.x_coordinate(2));
        assert!(!ind.needs_tick());
    }

    #[test]
    fn test_none_style_redraws_without_run() {
        let mut ind = indicator(3, AnimationStyle::None, false);
        ind.take_redraw();
        ind.select(1);
        assert!(ind.take_redraw());
        assert!(!ind.needs_tick());
        assert!(!ind.take_redraw());
    }

    #[test]
    fn test_forward_swipe() {
        let mut ind = indicator(3, AnimationStyle::Color, true);
        let unselected = ind.unselected_color();
        let selected = ind.selected_color();

        ind.on_scroll(0, 0.0);
        assert_eq!(ind.selection(), 0);

        ind.on_scroll(0, 0.5);
        assert_eq!(ind.selection_state().selecting, 1);
        assert_eq!(ind.selection(), 0);
        assert_eq!(ind.frame().color, unselected.lerp(selected, 0.5));

        ind.on_scroll(0, 0.99);
        assert_eq!(ind.selection_state().selecting, 1);
        assert_eq!(ind.selection(), 0);

        ind.on_scroll(1, 0.0);
        assert_eq!(ind.selection(), 1);
        assert_eq!(ind.selection_state().selecting, 1);
        assert_eq!(ind.frame().color, selected);
    }

    #[test]
    fn test_backward_swipe() {
        let mut ind = indicator(3, AnimationStyle::Slide, true);
        ind.on_scroll(1, 0.0);
        assert_eq!(ind.selection(), 1);

        ind.on_scroll(0, 0.75);
        assert_eq!(ind.selection_state().selecting, 0);
        assert_eq!(ind.selection(), 1);
        let x0 = ind.x_coordinate(0);
        let x1 = ind.x_coordinate(1);
        let expected = x1 + ((x0 - x1) as f32 * 0.25).round() as i32;
        assert_eq!(ind.frame().slide_x, expected);

        ind.on_scroll(0, 0.0);
        assert_eq!(ind.selection(), 0);
        assert_eq!(ind.frame().slide_x, x0);
    }

    #[test]
    fn test_overscroll_snaps_selection() {
        let mut ind = indicator(6, AnimationStyle::Worm, true);
        // Jump several pages at once: the pager reports page 4 directly
        ind.on_scroll(4, 0.5);
        assert_eq!(ind.selection(), 4);
        assert_eq!(ind.selection_state().selecting, 5);

        // And back again past the selection
        ind.on_scroll(1, 0.5);
        assert_eq!(ind.selection(), 1);
    }

    #[test]
    fn test_scroll_on_last_page_stays_in_row() {
        let mut ind = indicator(3, AnimationStyle::Slide, true);
        ind.on_scroll(2, 0.0);
        ind.on_scroll(2, 0.4);
        assert_eq!(ind.selection_state().selecting, 2);
        assert_eq!(ind.frame().slide_x, ind.x_coordinate(2));
    }

    #[test]
    fn test_scroll_ignored_when_not_interactive() {
        let mut ind = indicator(3, AnimationStyle::Slide, false);
        ind.on_scroll(1, 0.0);
        assert_eq!(ind.selection(), 0);
    }

    #[test]
    fn test_interactive_worm_keeps_capsule_well_formed() {
        let mut ind = indicator(4, AnimationStyle::Worm, true);
        for i in 0..=20 {
            ind.on_scroll(0, i as f32 / 21.0);
            let frame = ind.frame();
            assert!(frame.worm_left_x <= frame.worm_right_x);
        }
    }

    #[test]
    fn test_set_count_clamps_selection() {
        let mut ind = indicator(5, AnimationStyle::None, false);
        ind.select(4);
        ind.set_count(2);
        assert_eq!(ind.selection(), 1);
        ind.set_count(0);
        assert_eq!(ind.selection(), 0);
        ind.select(3);
        assert_eq!(ind.selection(), 0);
    }

    #[test]
    fn test_layout_change_rests_frame() {
        let mut ind = indicator(3, AnimationStyle::Slide, false);
        ind.select(1);
        ind.tick_at(Instant::now() + Duration::from_secs(1));
        ind.set_view_size(400, 20);
        assert_eq!(ind.frame().slide_x, ind.x_coordinate(1));
        let edges = Edges::around(ind.x_coordinate(1), ind.radius());
        assert_eq!(ind.frame().worm_left_x, edges.left);
    }

    #[test]
    fn test_layout_change_mid_run_lands_on_new_position() {
        let mut ind = indicator(3, AnimationStyle::Slide, false);
        let start = Instant::now();
        ind.select_at(2, start);
        ind.tick_at(start + Duration::from_millis(50));

        ind.set_view_size(400, 20);
        assert!(ind.needs_tick());
        ind.tick_at(start + Duration::from_millis(200));
        assert!(!ind.needs_tick());
        assert_eq!(ind.frame().slide_x, ind.x_coordinate(2));
    }

    #[test]
    fn test_shrinking_row_mid_run_keeps_worm_on_selection() {
        let mut ind = indicator(5, AnimationStyle::Worm, false);
        let start = Instant::now();
        ind.select_at(4, start);
        ind.tick_at(start + Duration::from_millis(30));

        ind.set_count(3);
        ind.tick_at(start + Duration::from_millis(200));
        let edges = Edges::around(ind.x_coordinate(2), ind.radius());
        assert_eq!(ind.selection(), 2);
        assert_eq!(ind.frame().worm_left_x, edges.left);
        assert_eq!(ind.frame().worm_right_x, edges.right);
    }

    #[test]
    fn test_style_change_rests_transition() {
        let mut ind = indicator(3, AnimationStyle::None, false);
        ind.select(2);
        assert_eq!(ind.selection_state().last_selected, 0);
        ind.set_animation_style(AnimationStyle::Scale);
        let state = ind.selection_state();
        assert_eq!(state.last_selected, 2);
        assert_eq!(state.selecting, 2);
        assert!(!state.is_active(0));
    }

    #[test]
    fn test_set_radius_clamps() {
        let mut ind = indicator(3, AnimationStyle::Worm, false);
        ind.set_radius(u32::MAX);
        assert_eq!(ind.radius(), MAX_RADIUS);
        ind.set_radius(0);
        assert_eq!(ind.radius(), MAX_RADIUS);
    }

    #[test]
    fn test_unselected_radius_only_shrinks_for_scale() {
        let mut ind = indicator(3, AnimationStyle::Color, false);
        assert_eq!(ind.unselected_radius(), 6);
        ind.set_animation_style(AnimationStyle::Scale);
        ind.set_scale_factor(0.5);
        assert_eq!(ind.unselected_radius(), 3);
    }

    #[test]
    fn test_measure_reports_intrinsic_size() {
        let ind = indicator(3, AnimationStyle::None, false);
        assert_eq!(
            ind.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified),
            (52, 12)
        );
    }
}
