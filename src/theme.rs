//! Theme selection and the few custom styles the contact list uses.

use iced::Theme as IcedTheme;
use iced::widget::{container, text};
use iced::{Background, Color};

/// Opacity of the section header background so rows remain faintly visible
/// beneath the pinned header.
const HEADER_BACKGROUND_ALPHA: f32 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl From<crate::config::ThemeMode> for Theme {
    fn from(mode: crate::config::ThemeMode) -> Self {
        match mode {
            crate::config::ThemeMode::Night => Theme::Dark,
            crate::config::ThemeMode::Day => Theme::Light,
        }
    }
}

impl From<Theme> for IcedTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => IcedTheme::Light,
            Theme::Dark => IcedTheme::Dark,
        }
    }
}

pub fn section_header(theme: &IcedTheme) -> container::Style {
    let palette = theme.extended_palette();
    let background = Color {
        a: HEADER_BACKGROUND_ALPHA,
        ..palette.primary.weak.color
    };
    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(palette.background.base.text),
        ..container::Style::default()
    }
}

pub fn contact_row(theme: &IcedTheme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        ..container::Style::default()
    }
}

pub fn secondary_text(theme: &IcedTheme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().secondary.base.color),
    }
}
