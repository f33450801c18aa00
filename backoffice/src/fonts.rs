use iced::Font;
use iced::font::{Family, Weight};

/// Family used for all shell text. Resolved from the system font database;
/// iced falls back to its default sans-serif face when it is missing.
const UI_FONT_FAMILY: &str = "Montserrat";

/// Body text configuration.
#[derive(Debug, Clone)]
pub(crate) struct UiFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for UiFonts {
    fn default() -> Self {
        Self {
            font_type: Font {
                family: Family::Name(UI_FONT_FAMILY),
                ..Font::default()
            },
            size: 14.0,
        }
    }
}

/// Heading text configuration (app bar title, page titles).
#[derive(Debug, Clone)]
pub(crate) struct TitleFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for TitleFonts {
    fn default() -> Self {
        Self {
            font_type: Font {
                weight: Weight::Medium,
                family: Family::Name(UI_FONT_FAMILY),
                ..Font::default()
            },
            size: 20.0,
        }
    }
}

/// Combined font configuration for the shell.
#[derive(Debug, Default, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) ui: UiFonts,
    pub(crate) title: TitleFonts,
}
