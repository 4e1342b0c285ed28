// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the bookmark drawer and settings.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Bar holding screen actions.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Dims everything behind a modal dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Flat fill standing in for an uncached page.
pub fn placeholder(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(theme.extended_palette().background.strong.text),
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Tooltip bubble, inverted against the theme background for contrast.
pub fn tooltip(theme: &Theme) -> container::Style {
    let (background, text) = if theme.extended_palette().is_dark {
        (Color::from_rgba(0.95, 0.95, 0.95, 0.98), palette::GRAY_900)
    } else {
        (Color::from_rgba(0.15, 0.15, 0.15, 0.98), Color::from_rgb(0.95, 0.95, 0.95))
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color {
                a: 0.3,
                ..palette::GRAY_400
            },
        },
        shadow: shadow::SM,
        text_color: Some(text),
        ..Default::default()
    }
}
