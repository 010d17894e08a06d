use pagedots_core::config::ThemeColorOverrides;
use pagedots_core::Color as DotColor;
use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey1: Color,
    pub grey2: Color,

    // Semantic colors
    pub accent: Color,
    pub warning: Color,

    /// Background the indicator colors are blended onto
    pub background: DotColor,
}

impl Default for Theme {
    fn default() -> Self {
        // Default to Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            warning: Color::Rgb(0xe7, 0x8a, 0x4e),
            background: DotColor::rgb(0x28, 0x28, 0x28),
        }
    }
}

/// Convert an indicator color to a terminal color, dropping alpha
pub fn to_ratatui(color: DotColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Build the theme, applying any configured overrides
pub fn load_theme(overrides: &ThemeColorOverrides) -> Theme {
    let mut theme = Theme::default();

    if let Some(background) = overrides.background {
        // Blend translucent overrides onto black so the terminal gets a solid color
        let background = background.over(DotColor::rgb(0, 0, 0));
        theme.background = background;
        theme.bg0 = to_ratatui(background);
    }
    if let Some(foreground) = overrides.foreground {
        theme.fg0 = to_ratatui(foreground);
    }
    if let Some(accent) = overrides.accent {
        theme.accent = to_ratatui(accent);
    }

    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply() {
        let theme = load_theme(&ThemeColorOverrides {
            background: Some(DotColor::rgb(0x10, 0x20, 0x30)),
            foreground: None,
            accent: Some(DotColor::rgb(0xff, 0, 0)),
        });
        assert_eq!(theme.bg0, Color::Rgb(0x10, 0x20, 0x30));
        assert_eq!(theme.background, DotColor::rgb(0x10, 0x20, 0x30));
        assert_eq!(theme.accent, Color::Rgb(0xff, 0, 0));
        assert_eq!(theme.fg0, Theme::default().fg0);
    }
}
