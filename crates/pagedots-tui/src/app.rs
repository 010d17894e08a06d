use std::sync::Arc;
use std::time::Instant;

use pagedots_core::{AnimationStyle, AppConfig, PageIndicator};

use crate::input::Action;
use crate::pager::{Pager, PagerEvent};
use crate::theme::{load_theme, Theme};

/// Largest indicator row the demo lets you build
const MAX_INDICATORS: usize = 20;
/// Largest indicator radius in layout pixels
const MAX_RADIUS: u32 = 16;

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Paging through the demo pages
    Normal,
    /// Help overlay
    Help,
}

/// Demo application state: a pager driving an indicator row
pub struct App {
    pub config: Arc<AppConfig>,
    pub indicator: PageIndicator,
    pub pager: Pager,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let indicator = PageIndicator::new(&config.indicator);
        let mut pager = Pager::new(indicator.count(), config.pager.clone());
        pager.set_current(indicator.selection());
        let theme = load_theme(&config.ui.theme);

        Self {
            config,
            indicator,
            pager,
            theme,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Whether the next frame should come at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.pager.is_animating() || self.indicator.needs_tick()
    }

    pub fn handle_action(&mut self, action: Action) {
        self.handle_action_at(action, Instant::now());
    }

    /// Apply a user action at `now`
    pub fn handle_action_at(&mut self, action: Action, now: Instant) {
        if action != Action::None {
            self.clear_status();
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::PrevPage => {
                let page = self.pager.current_page().saturating_sub(1);
                self.pager.swipe_to_at(page, now);
            }
            Action::NextPage => {
                let page = self.pager.current_page().saturating_add(1);
                self.pager.swipe_to_at(page, now);
            }
            Action::SelectPage(page) => self.select_page(page, now),
            Action::CycleStyle => {
                let style = self.indicator.animation_style().next();
                self.indicator.set_animation_style(style);
                tracing::debug!("Animation style changed to {}", style);
                self.set_status(format!("Style: {}", style));
            }
            Action::ToggleInteractive => {
                let interactive = !self.indicator.is_interactive();
                self.indicator.set_interactive(interactive);
                self.pager.set_current(self.indicator.selection());
                tracing::debug!("Interactive mode {}", if interactive { "on" } else { "off" });
                self.set_status(if interactive {
                    "Interactive: progress follows the pager"
                } else {
                    "Timed: selections animate on their own"
                });
            }
            Action::MoreIndicators => {
                self.set_count((self.indicator.count() + 1).min(MAX_INDICATORS));
            }
            Action::FewerIndicators => {
                self.set_count(self.indicator.count().saturating_sub(1));
            }
            Action::GrowRadius => {
                let radius = (self.indicator.radius() + 1).min(MAX_RADIUS);
                self.indicator.set_radius(radius);
                self.set_status(format!("Radius: {}", radius));
            }
            Action::ShrinkRadius => {
                let radius = self.indicator.radius().saturating_sub(1).max(1);
                self.indicator.set_radius(radius);
                self.set_status(format!("Radius: {}", radius));
            }
            Action::ToggleHelp => {
                self.mode = match self.mode {
                    Mode::Help => Mode::Normal,
                    Mode::Normal => Mode::Help,
                };
            }
            Action::ExitMode => self.mode = Mode::Normal,
            Action::None => {}
        }
    }

    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    /// Feed pager events into the indicator and advance timed runs
    pub fn update_at(&mut self, now: Instant) {
        for event in self.pager.update_at(now) {
            match event {
                PagerEvent::Scrolled { position, offset } => {
                    if self.indicator.is_interactive() {
                        self.indicator.on_scroll(position, offset);
                    }
                }
                PagerEvent::PageSelected(page) => {
                    if !self.indicator.is_interactive() {
                        self.indicator.select_at(page as i64, now);
                    }
                }
            }
        }
        self.indicator.tick_at(now);
    }

    fn select_page(&mut self, page: usize, now: Instant) {
        if page >= self.indicator.count() {
            self.set_status(format!("No page {}", page + 1));
            return;
        }

        let rejected = self.indicator.is_interactive()
            && self.indicator.animation_style() != AnimationStyle::None;
        if rejected {
            tracing::debug!("Direct select of page {} rejected in interactive mode", page);
            self.set_status("Direct select ignored in interactive mode");
            return;
        }

        self.indicator.select_at(page as i64, now);
        self.pager.set_current(self.indicator.selection());
        self.set_status(format!("Selected page {}", page + 1));
    }

    fn set_count(&mut self, count: usize) {
        self.indicator.set_count(count);
        self.pager.set_page_count(count);
        self.pager.set_current(self.indicator.selection());
        self.set_status(format!("Indicators: {}", count));
    }
}
