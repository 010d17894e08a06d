//! Simulated pager: the page-scroll event source driving the indicator
//!
//! # Architecture
//!
//! ## Atomic Layer
//! - `easing` - Swipe curves mapping elapsed time to a position in pages
//!
//! ## Molecular Layer
//! - `animation` - Pager driving a swipe curve from the core timing helpers
//!
//! # Usage
//!
//! ```ignore
//! use pagedots_tui::pager::{Pager, PagerEvent};
//!
//! let mut pager = Pager::new(5, PagerConfig::default());
//! pager.next();
//!
//! // In main loop, update each frame and forward the events
//! for event in pager.update() {
//!     match event {
//!         PagerEvent::Scrolled { position, offset } => indicator.on_scroll(position, offset),
//!         PagerEvent::PageSelected(page) => indicator.select(page as i64),
//!     }
//! }
//! ```

// Atomic Layer
pub mod easing;

// Molecular Layer
pub mod animation;

// Re-exports for convenient access
pub use animation::{Pager, PagerEvent};
pub use easing::SwipeCurve;
