// SPDX-License-Identifier: MPL-2.0
//! Document viewer: page list, page indicator, jump field and bookmark drawer.

pub mod component;
pub mod drawer;
pub mod geometry;
pub mod pane;
pub mod toolbar;

pub use component::{Effect, Message, State};

use crate::i18n::fluent::I18n;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Environment information required to render the viewer.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub is_dark: bool,
}

pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let mut body = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(pane::view(state, &env));

    if state.is_drawer_open() {
        body = body.push(
            Container::new(drawer::view(state, &env))
                .height(Length::Fill)
                .padding(crate::ui::design_tokens::spacing::XS),
        );
    }

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(toolbar::view(state, &env))
        .push(body)
        .into()
}
