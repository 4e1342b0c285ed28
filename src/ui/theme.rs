// SPDX-License-Identifier: MPL-2.0
//! Shared colors for page surfaces and the capture overlay.

use crate::config::CROP_SHADE_ALPHA;
use crate::ui::design_tokens::palette::{self, BLACK, GRAY_100, GRAY_700, GRAY_900, WHITE};
use iced::widget::container;
use iced::{Color, Theme};

/// Surface behind pages in the viewer and editor.
pub fn page_surface_color(theme: &Theme) -> Color {
    if theme.extended_palette().is_dark {
        GRAY_900
    } else {
        GRAY_100
    }
}

/// Fill for pages that are not in the cache yet.
pub fn page_placeholder_color(theme: &Theme) -> Color {
    if theme.extended_palette().is_dark {
        GRAY_700
    } else {
        WHITE
    }
}

pub fn error_text_color() -> Color {
    palette::ERROR_500
}

pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Style for the area pages are drawn on.
pub fn page_surface_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(page_surface_color(theme))),
        ..Default::default()
    }
}

/// Shade laid over the page outside the capture selection.
pub fn crop_shade_color() -> Color {
    Color {
        a: f32::from(CROP_SHADE_ALPHA) / 255.0,
        ..BLACK
    }
}

pub fn crop_border_color() -> Color {
    WHITE
}

pub fn crop_thumb_color() -> Color {
    WHITE
}

pub fn crop_thumb_border_color() -> Color {
    BLACK
}
