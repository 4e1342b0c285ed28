// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn framed(background: Color, text_color: Color, outline: Color, shadow: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: outline,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Main action of a dialog or screen.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => framed(palette::PRIMARY_400, WHITE, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => framed(palette::GRAY_200, palette::GRAY_400, palette::GRAY_400, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            framed(palette::PRIMARY_500, WHITE, palette::PRIMARY_600, shadow::SM)
        }
    }
}

/// Irreversible actions such as clearing every bookmark.
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: 0.85,
            ..palette::ERROR_500
        },
        _ => palette::ERROR_500,
    };
    framed(background, WHITE, palette::ERROR_500, shadow::SM)
}

/// Highlights the active entry of a toggle group (tool, weight, theme).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    primary(theme, status)
}

/// Secondary actions and unselected toggle entries.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let dark = theme.extended_palette().is_dark;
    let (background, hovered, text) = if dark {
        (palette::GRAY_700, Color::from_rgb(0.35, 0.35, 0.35), WHITE)
    } else {
        (palette::GRAY_100, palette::GRAY_200, palette::GRAY_900)
    };

    match status {
        button::Status::Hovered => framed(hovered, text, palette::PRIMARY_500, shadow::SM),
        _ => framed(background, text, palette::GRAY_400, shadow::NONE),
    }
}

/// Round color button of the editor palette, ringed when selected.
pub fn swatch(color: Color, is_selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let ring = if is_selected || status == button::Status::Hovered {
            palette::PRIMARY_500
        } else {
            palette::GRAY_400
        };
        button::Style {
            // Show highlighter swatches at full strength so they stay legible.
            background: Some(Background::Color(Color { a: 1.0, ..color })),
            text_color: WHITE,
            border: Border {
                color: ring,
                width: if is_selected {
                    border::WIDTH_MD * 1.5
                } else {
                    border::WIDTH_SM
                },
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::PRIMARY_500)));
    }

    #[test]
    fn unselected_follows_theme_brightness() {
        let light = unselected(&Theme::Light, button::Status::Active);
        let dark = unselected(&Theme::Dark, button::Status::Active);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn selected_swatch_has_a_thicker_ring() {
        let red = Color::from_rgb(1.0, 0.0, 0.0);
        let on = swatch(red, true)(&Theme::Light, button::Status::Active);
        let off = swatch(red, false)(&Theme::Light, button::Status::Active);
        assert!(on.border.width > off.border.width);
        assert_eq!(on.background, Some(Background::Color(red)));
    }
}
