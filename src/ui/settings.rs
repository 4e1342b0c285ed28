// SPDX-License-Identifier: MPL-2.0
//! Settings screen: handedness, bookmark clearing, language and theme.
//!
//! The screen owns only the state of the "clear bookmarks" confirmation.
//! Every other change is reported to the application as an [`Event`] so
//! that it can update the configuration and persist it.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, rule, scrollable, toggler, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub is_dark: bool,
    pub left_handed: bool,
    pub theme_mode: ThemeMode,
    /// Whether a document is open, enabling "This file" in the confirmation.
    pub has_document: bool,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToViewer,
    LeftHandedToggled(bool),
    ClearBookmarksRequested,
    ClearAllConfirmed,
    ClearCurrentConfirmed,
    ClearCancelled,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    BackToViewer,
    LeftHandedChanged(bool),
    ClearAllBookmarks,
    ClearCurrentBookmarks,
    LanguageChanged(LanguageIdentifier),
    ThemeModeChanged(ThemeMode),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    confirming_clear: bool,
}

impl State {
    #[must_use]
    pub fn is_confirming_clear(&self) -> bool {
        self.confirming_clear
    }

    /// Escape dismisses the confirmation before leaving the screen.
    pub fn handle_escape(&mut self) -> Event {
        if self.confirming_clear {
            self.confirming_clear = false;
            Event::None
        } else {
            Event::BackToViewer
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::BackToViewer => {
                self.confirming_clear = false;
                Event::BackToViewer
            }
            Message::LeftHandedToggled(value) => Event::LeftHandedChanged(value),
            Message::ClearBookmarksRequested => {
                self.confirming_clear = true;
                Event::None
            }
            Message::ClearAllConfirmed => {
                self.confirming_clear = false;
                Event::ClearAllBookmarks
            }
            Message::ClearCurrentConfirmed => {
                self.confirming_clear = false;
                Event::ClearCurrentBookmarks
            }
            Message::ClearCancelled => {
                self.confirming_clear = false;
                Event::None
            }
            Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
            Message::ThemeModeSelected(mode) => Event::ThemeModeChanged(mode),
        }
    }

    #[must_use]
    #[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let back_button = button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(icons::sized(icons::for_theme(Glyph::ArrowLeft, ctx.is_dark), sizing::ICON_SM))
                .push(Text::new(i18n.tr("settings-back-button")).size(typography::BODY)),
        )
        .style(styles::button::unselected)
        .on_press(Message::BackToViewer);

        let title = Text::new(i18n.tr("settings-title")).size(typography::TITLE_LG);

        let content = Column::new()
            .width(Length::Fill)
            .max_width(sizing::SETTINGS_WIDTH)
            .spacing(spacing::LG)
            .padding(spacing::MD)
            .push(back_button)
            .push(title)
            .push(self.handedness_section(&ctx))
            .push(self.bookmarks_section(&ctx))
            .push(language_section(&ctx))
            .push(theme_section(&ctx));

        scrollable(
            Container::new(content)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .into()
    }

    fn handedness_section<'a>(&self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let toggle = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new(ctx.i18n.tr("settings-left-handed-label")).size(typography::BODY))
            .push(Space::new().width(Length::Fill))
            .push(toggler(ctx.left_handed).on_toggle(Message::LeftHandedToggled));
        let hint = Text::new(ctx.i18n.tr("settings-left-handed-hint")).size(typography::BODY_SM);

        build_section(
            ctx.i18n.tr("settings-section-handedness"),
            Column::new().spacing(spacing::XS).push(toggle).push(hint).into(),
        )
    }

    fn bookmarks_section<'a>(&self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let body: Element<'a, Message> = if self.confirming_clear {
            let buttons = Row::new()
                .spacing(spacing::XS)
                .push(
                    button(Text::new(i18n.tr("settings-clear-all")))
                        .style(styles::button::danger)
                        .on_press(Message::ClearAllConfirmed),
                )
                .push(
                    button(Text::new(i18n.tr("settings-clear-current")))
                        .style(styles::button::primary)
                        .on_press_maybe(ctx.has_document.then_some(Message::ClearCurrentConfirmed)),
                )
                .push(
                    button(Text::new(i18n.tr("settings-clear-cancel")))
                        .style(styles::button::unselected)
                        .on_press(Message::ClearCancelled),
                );
            Column::new()
                .spacing(spacing::SM)
                .push(Text::new(i18n.tr("settings-clear-confirm")).size(typography::BODY))
                .push(buttons)
                .into()
        } else {
            button(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(icons::sized(icons::light(Glyph::Trash), sizing::ICON_SM))
                    .push(Text::new(i18n.tr("settings-clear-bookmarks"))),
            )
            .style(styles::button::danger)
            .on_press(Message::ClearBookmarksRequested)
            .into()
        };

        build_section(i18n.tr("settings-section-bookmarks"), body)
    }
}

fn language_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let buttons = i18n
        .available_locales
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, locale| {
            row.push(
                button(Text::new(language_label(i18n, locale)))
                    .style(if i18n.current_locale() == locale {
                        styles::button::selected
                    } else {
                        styles::button::unselected
                    })
                    .on_press(Message::LanguageSelected(locale.clone())),
            )
        });

    build_section(i18n.tr("settings-section-language"), buttons.into())
}

fn theme_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let buttons = ThemeMode::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &mode| {
            row.push(
                button(Text::new(ctx.i18n.tr(mode.i18n_key())))
                    .style(if ctx.theme_mode == mode {
                        styles::button::selected
                    } else {
                        styles::button::unselected
                    })
                    .on_press(Message::ThemeModeSelected(mode)),
            )
        });

    build_section(ctx.i18n.tr("settings-section-theme"), buttons.into())
}

/// Translated language name followed by its identifier, or the bare
/// identifier when no translation exists.
fn language_label(i18n: &I18n, locale: &LanguageIdentifier) -> String {
    let translated = i18n.tr(&format!("language-name-{locale}"));
    if translated.starts_with("MISSING:") {
        locale.to_string()
    } else {
        format!("{translated} ({locale})")
    }
}

fn build_section(title: String, content: Element<'_, Message>) -> Element<'_, Message> {
    let inner = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(rule::horizontal(1))
        .push(content);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
