// SPDX-License-Identifier: MPL-2.0
//! Widgets shared by several screens.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::styles;
use iced::widget::{button, tooltip, Container, Text};
use iced::Element;

/// Square toolbar button showing `glyph`, with `label` as tooltip.
///
/// `selected` marks the active entry of a toggle group. A `None` message
/// renders the button disabled.
pub fn icon_button<'a, Message: Clone + 'a>(
    glyph: Glyph,
    label: String,
    message: Option<Message>,
    selected: bool,
    is_dark: bool,
) -> Element<'a, Message> {
    // Selected buttons sit on the brand color, which needs white strokes.
    let icon = if selected {
        icons::light(glyph)
    } else {
        icons::for_theme(glyph, is_dark)
    };

    let button = button(icons::sized(icon, sizing::ICON_MD))
        .padding(spacing::XS)
        .on_press_maybe(message)
        .style(if selected {
            styles::button::selected
        } else {
            styles::button::unselected
        });

    let tip = Container::new(Text::new(label).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(styles::container::tooltip);

    tooltip(button, tip, tooltip::Position::Bottom)
        .gap(spacing::XS)
        .into()
}
