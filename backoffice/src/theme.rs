use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Hex color palette as stored in the shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ColorPalette {
    pub(crate) background: String,
    pub(crate) surface: String,
    pub(crate) foreground: String,
    pub(crate) dim_foreground: String,
    pub(crate) primary: String,
    pub(crate) on_primary: String,
    pub(crate) divider: String,
    pub(crate) hover: String,
    pub(crate) selected: String,
    pub(crate) scrim: String,
    pub(crate) success: String,
    pub(crate) warning: String,
    pub(crate) danger: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            background: String::from("#F5F6FA"),
            surface: String::from("#FFFFFF"),
            foreground: String::from("#1F2430"),
            dim_foreground: String::from("#5F6678"),
            primary: String::from("#1976D2"),
            on_primary: String::from("#FFFFFF"),
            divider: String::from("#E0E0E0"),
            hover: String::from("#0000000A"),
            selected: String::from("#1976D21F"),
            scrim: String::from("#00000080"),
            success: String::from("#2E7D32"),
            warning: String::from("#ED6C02"),
            danger: String::from("#D32F2F"),
        }
    }
}

/// Palette resolved into iced colors.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct IcedColorPalette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) primary: Color,
    pub(crate) on_primary: Color,
    pub(crate) divider: Color,
    pub(crate) hover: Color,
    pub(crate) selected: Color,
    pub(crate) scrim: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
    pub(crate) danger: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        let fallback = ColorPalette::default();
        let resolve = |value: &str, default: &str| {
            parse_hex_color(value).unwrap_or_else(|| {
                log::warn!("invalid palette color {value:?}, using {default}");
                parse_hex_color(default).unwrap_or(Color::BLACK)
            })
        };

        Self {
            background: resolve(&p.background, &fallback.background),
            surface: resolve(&p.surface, &fallback.surface),
            foreground: resolve(&p.foreground, &fallback.foreground),
            dim_foreground: resolve(&p.dim_foreground, &fallback.dim_foreground),
            primary: resolve(&p.primary, &fallback.primary),
            on_primary: resolve(&p.on_primary, &fallback.on_primary),
            divider: resolve(&p.divider, &fallback.divider),
            hover: resolve(&p.hover, &fallback.hover),
            selected: resolve(&p.selected, &fallback.selected),
            scrim: resolve(&p.scrim, &fallback.scrim),
            success: resolve(&p.success, &fallback.success),
            warning: resolve(&p.warning, &fallback.warning),
            danger: resolve(&p.danger, &fallback.danger),
        }
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into a color.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    let channel = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16);

    match hex.len() {
        6 => {
            let (r, g, b) = (channel(0).ok()?, channel(2).ok()?, channel(4).ok()?);
            Some(Color::from_rgb8(r, g, b))
        },
        8 => {
            let (r, g, b, a) = (
                channel(0).ok()?,
                channel(2).ok()?,
                channel(4).ok()?,
                channel(6).ok()?,
            );
            Some(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
        },
        _ => None,
    }
}

/// Optional overrides for widget/component styling.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StyleOverrides {
    pub(crate) background: Option<Color>,
    pub(crate) foreground: Option<Color>,
}

/// Application theme shared by every widget.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_palette(String::from("default"), &ColorPalette::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.primary,
            success: palette.success,
            warning: palette.warning,
            danger: palette.danger,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    /// Build an application theme from a configured palette.
    pub(crate) fn from_palette(id: String, raw_palette: &ColorPalette) -> Self {
        Self {
            id,
            iced_palette: IcedColorPalette::from(raw_palette),
        }
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
    pub(crate) overrides: Option<StyleOverrides>,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self {
            theme,
            overrides: None,
        }
    }

    /// Same theme with component overrides applied.
    pub(crate) fn with_overrides(self, overrides: StyleOverrides) -> Self {
        Self {
            theme: self.theme,
            overrides: Some(overrides),
        }
    }
}

/// Owns the current theme.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new(palette: &ColorPalette) -> Self {
        Self {
            current: AppTheme::from_palette(String::from("backoffice"), palette),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{ColorPalette, IcedColorPalette, parse_hex_color};

    #[test]
    fn given_rgb_hex_when_parsed_then_returns_opaque_color() {
        let color = parse_hex_color("#1976D2").expect("valid hex color");
        assert_eq!(color, Color::from_rgb8(0x19, 0x76, 0xD2));
    }

    #[test]
    fn given_rgba_hex_when_parsed_then_alpha_is_applied() {
        let color = parse_hex_color("#00000080").expect("valid hex color");
        assert!((color.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn given_malformed_hex_when_parsed_then_returns_none() {
        assert_eq!(parse_hex_color("1976D2"), None);
        assert_eq!(parse_hex_color("#19"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
        assert_eq!(parse_hex_color("#ÄÄÄ"), None);
    }

    #[test]
    fn given_invalid_palette_entry_when_resolved_then_default_color_is_used() {
        let palette = ColorPalette {
            primary: String::from("not-a-color"),
            ..ColorPalette::default()
        };

        let resolved = IcedColorPalette::from(&palette);
        let defaults = IcedColorPalette::from(&ColorPalette::default());

        assert_eq!(resolved.primary, defaults.primary);
    }
}
