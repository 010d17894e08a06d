pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod indicator;
pub mod layout;
pub mod render;

pub use animation::{AnimationStyle, FrameState};
pub use color::Color;
pub use config::{AppConfig, EasingType, IndicatorConfig, PagerConfig};
pub use error::{Error, Result};
pub use indicator::{PageIndicator, SelectionState};
pub use layout::{LayoutConfig, MeasureSpec};
pub use render::{render, IndicatorCanvas, Rect};
