use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::animation::scale::{clamp_scale_factor, DEFAULT_SCALE_FACTOR};
use crate::animation::AnimationStyle;
use crate::color::Color;

/// Largest accepted indicator radius in pixels
pub const MAX_RADIUS: u32 = 256;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub indicator: IndicatorConfig,
    #[serde(default)]
    pub pager: PagerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Initial state of the indicator row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// Number of indicators; negative values are treated as 0
    #[serde(default = "default_count")]
    pub count: i64,
    /// Initially selected indicator, clamped into the row
    #[serde(default)]
    pub selected: i64,
    /// Radius of each indicator in pixels
    #[serde(default = "default_radius")]
    pub radius: u32,
    /// Gap between indicators in pixels
    #[serde(default = "default_padding")]
    pub padding: u32,
    /// Shrink factor of unselected indicators for the scale style
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f32,
    #[serde(default = "default_unselected_color")]
    pub unselected_color: Color,
    #[serde(default = "default_selected_color")]
    pub selected_color: Color,
    /// Duration of a timed transition in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Drive transitions from page scrolling instead of a timer
    #[serde(default)]
    pub interactive: bool,
    #[serde(default)]
    pub style: AnimationStyle,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            selected: 0,
            radius: default_radius(),
            padding: default_padding(),
            scale_factor: default_scale_factor(),
            unselected_color: default_unselected_color(),
            selected_color: default_selected_color(),
            animation_duration_ms: default_animation_duration(),
            interactive: false,
            style: AnimationStyle::default(),
        }
    }
}

impl IndicatorConfig {
    /// Indicator count with negatives treated as 0
    pub fn count(&self) -> usize {
        self.count.max(0) as usize
    }

    /// Initial selection clamped into `[0, count - 1]`
    pub fn selected(&self) -> usize {
        let last = self.count().saturating_sub(1) as i64;
        self.selected.clamp(0, last) as usize
    }

    pub fn scale_factor(&self) -> f32 {
        clamp_scale_factor(self.scale_factor)
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Copy with every out-of-range value clamped, logging what changed
    pub fn sanitized(&self) -> Self {
        let mut config = self.clone();

        if config.count < 0 {
            tracing::warn!("Indicator count {} is negative, using 0", config.count);
            config.count = 0;
        }
        let selected = config.selected() as i64;
        if selected != config.selected {
            tracing::warn!(
                "Selected indicator {} out of range, using {}",
                config.selected,
                selected
            );
            config.selected = selected;
        }
        let factor = config.scale_factor();
        if factor != config.scale_factor {
            tracing::warn!(
                "Scale factor {} out of range, using {}",
                config.scale_factor,
                factor
            );
            config.scale_factor = factor;
        }
        if config.radius == 0 {
            tracing::warn!("Indicator radius must be positive, using {}", default_radius());
            config.radius = default_radius();
        } else if config.radius > MAX_RADIUS {
            tracing::warn!(
                "Indicator radius {} too large, using {}",
                config.radius,
                MAX_RADIUS
            );
            config.radius = MAX_RADIUS;
        }

        config
    }
}

/// Easing curve of the simulated page scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

/// Simulated pager feeding scroll events to the indicator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Duration of one page swipe in milliseconds
    #[serde(default = "default_swipe_duration")]
    pub swipe_duration_ms: u64,
    /// Easing of the swipe
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while something is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            swipe_duration_ms: default_swipe_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Optional color overrides for the terminal theme
    #[serde(default)]
    pub theme: ThemeColorOverrides,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: ThemeColorOverrides::default(),
        }
    }
}

/// Optional color overrides for theme customization
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Background the indicators are composited on
    pub background: Option<Color>,
    /// Primary foreground
    pub foreground: Option<Color>,
    /// Accent color
    pub accent: Option<Color>,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pagedots")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_count() -> i64 {
    5
}

fn default_radius() -> u32 {
    6
}

fn default_padding() -> u32 {
    8
}

fn default_scale_factor() -> f32 {
    DEFAULT_SCALE_FACTOR
}

fn default_unselected_color() -> Color {
    Color::argb(0x33, 0xff, 0xff, 0xff)
}

fn default_selected_color() -> Color {
    Color::WHITE
}

fn default_animation_duration() -> u64 {
    350
}

fn default_swipe_duration() -> u64 {
    400
}

fn default_animation_fps() -> u32 {
    60
}

fn default_tick_rate() -> u64 {
    100
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, defaults if it is missing
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render configuration as TOML text
    pub fn to_toml(&self) -> crate::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pagedots/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pagedots")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("pagedots.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
