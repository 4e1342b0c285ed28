// SPDX-License-Identifier: MPL-2.0
//! Start screen shown while no document is open.
//!
//! Offers a button opening the system file dialog and hints that a PDF can
//! be dropped on the window.

use crate::i18n::fluent::I18n;
use crate::ui::components::icon_button;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    OpenFileRequested,
    OpenSettings,
}

pub fn view(i18n: &I18n, is_dark: bool) -> Element<'_, Message> {
    let icon = icons::sized(icons::for_theme(Glyph::Document, is_dark), sizing::ICON_XL * 2.0);

    let title = Text::new(i18n.tr("sourcing-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr("sourcing-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let button_content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::light(Glyph::FolderOpen), sizing::ICON_SM))
        .push(Text::new(i18n.tr("open-pdf-button")));

    let open_button = button(button_content)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenFileRequested);

    let drop_hint = Text::new(i18n.tr("sourcing-drop-hint"))
        .size(typography::CAPTION)
        .color(Color {
            a: 0.5,
            ..palette::GRAY_400
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(title)
        .push(subtitle)
        .push(open_button)
        .push(drop_hint);

    let header = Row::new()
        .padding(spacing::SM)
        .push(Space::new().width(Length::Fill))
        .push(icon_button(
            Glyph::Cog,
            i18n.tr("viewer-settings-tooltip"),
            Some(Message::OpenSettings),
            false,
            is_dark,
        ));

    Column::new()
        .push(header)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .into()
}
