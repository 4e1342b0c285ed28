// SPDX-License-Identifier: MPL-2.0
//! Toast cards stacked in the bottom-right corner.

use super::manager::{Manager, Message};
use super::notification::{Notification, NotificationId, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Renders a single toast: severity icon, translated message, dismiss button.
    pub fn view<'a>(
        id: NotificationId,
        notification: &'a Notification,
        i18n: &'a I18n,
        is_dark: bool,
    ) -> Element<'a, Message> {
        let accent_color = notification.severity().color();

        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        let message = i18n.tr_with_args(notification.message_key(), &args);

        let dismiss = button(icons::sized(
            icons::for_theme(icons::Glyph::Cross, is_dark),
            sizing::ICON_SM,
        ))
        .on_press(Message::Dismiss(id))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(Self::severity_icon(notification.severity()), sizing::ICON_MD))
            .push(Text::new(message).size(typography::BODY).width(Length::Fill))
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Every visible toast, newest on top, anchored bottom-right.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n, is_dark: bool) -> Element<'a, Message> {
        if manager.visible_count() == 0 {
            return Space::new().width(Length::Shrink).height(Length::Shrink).into();
        }

        let toasts = Column::with_children(
            manager
                .visible()
                .map(|(id, notification)| Self::view(id, notification, i18n, is_dark)),
        )
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

        Container::new(toasts)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }

    fn severity_icon(severity: Severity) -> Image<Handle> {
        match severity {
            Severity::Success => icons::success(),
            Severity::Info => icons::info(),
            Severity::Warning | Severity::Error => icons::warning(),
        }
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let background = theme.extended_palette().background.base;

    container::Style {
        background: Some(iced::Background::Color(background.color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(background.text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| iced::Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
