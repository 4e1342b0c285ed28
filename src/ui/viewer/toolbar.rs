// SPDX-License-Identifier: MPL-2.0
//! Viewer toolbar: document actions, page indicator and jump field.

use super::component::{Message, State};
use super::ViewEnv;
use crate::ui::components::icon_button;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::Glyph;
use crate::ui::styles;
use iced::widget::{text_input, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(state: &'a State, env: &ViewEnv<'a>) -> Element<'a, Message> {
    let i18n = env.i18n;
    let action = |glyph, key: &str, message| icon_button(glyph, i18n.tr(key), Some(message), false, env.is_dark);

    let indicator = i18n.tr_with_args(
        "viewer-page-indicator",
        &[
            ("page", &(state.current_page() + 1).to_string()),
            ("count", &state.page_count().to_string()),
        ],
    );

    let jump = text_input(&i18n.tr("viewer-jump-placeholder"), state.jump_input())
        .on_input(Message::JumpInputChanged)
        .on_submit(Message::JumpSubmitted)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::JUMP_INPUT_WIDTH));

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(action(Glyph::ArrowLeft, "viewer-close-tooltip", Message::CloseDocument))
        .push(icon_button(
            Glyph::List,
            i18n.tr("viewer-bookmarks-tooltip"),
            Some(Message::ToggleDrawer),
            state.is_drawer_open(),
            env.is_dark,
        ))
        .push(action(Glyph::BookmarkPlus, "viewer-add-bookmark-tooltip", Message::AddBookmark))
        .push(action(Glyph::Pencil, "viewer-edit-tooltip", Message::OpenEditor))
        .push(action(Glyph::Crop, "viewer-capture-tooltip", Message::OpenCapture))
        .push(action(Glyph::Cog, "viewer-settings-tooltip", Message::OpenSettings))
        .push(
            Container::new(Text::new(state.file_name()).size(typography::BODY_SM))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .push(Text::new(indicator).size(typography::BODY))
        .push(Space::new().width(Length::Fixed(spacing::XS)))
        .push(jump);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .padding([spacing::XS, spacing::SM])
        .align_y(alignment::Vertical::Center)
        .style(styles::container::toolbar)
        .into()
}
