// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with the save prompt and toasts layered on top.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::capture;
use crate::ui::editor;
use crate::ui::notifications::{self, Toast};
use crate::ui::save_prompt;
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::sourcing;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub viewer: Option<&'a viewer::State>,
    pub editor: Option<&'a editor::State>,
    pub capture: Option<&'a capture::State>,
    pub settings: &'a settings::State,
    pub save_prompt: Option<&'a save_prompt::State>,
    pub notifications: &'a notifications::Manager,
    pub theme_mode: ThemeMode,
    pub left_handed: bool,
    pub is_dark: bool,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let is_dark = ctx.is_dark;

    let current_view: Element<'_, Message> = match (ctx.screen, ctx.viewer, ctx.editor, ctx.capture) {
        (Screen::Viewer, Some(state), _, _) => {
            viewer::view(state, viewer::ViewEnv { i18n, is_dark }).map(Message::Viewer)
        }
        (Screen::Editor, _, Some(state), _) => state
            .view(&editor::ViewEnv { i18n, is_dark })
            .map(Message::Editor),
        (Screen::Capture, _, _, Some(state)) => state
            .view(&capture::ViewEnv { i18n, is_dark })
            .map(Message::Capture),
        (Screen::Settings, ..) => ctx
            .settings
            .view(SettingsViewContext {
                i18n,
                is_dark,
                left_handed: ctx.left_handed,
                theme_mode: ctx.theme_mode,
                has_document: ctx.viewer.is_some(),
            })
            .map(Message::Settings),
        // Sourcing, or a screen whose state went missing.
        _ => sourcing::view(i18n, is_dark).map(Message::Sourcing),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        );

    if let Some(prompt) = ctx.save_prompt {
        layers = layers.push(prompt.view(i18n).map(Message::SavePrompt));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, i18n, is_dark).map(Message::Notification))
        .into()
}
