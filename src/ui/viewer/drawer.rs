// SPDX-License-Identifier: MPL-2.0
//! Bookmark drawer: list, inline edit form and "add" action.

use super::component::{BookmarkForm, FormError, Message, State};
use super::ViewEnv;
use crate::bookmarks::Bookmark;
use crate::i18n::fluent::I18n;
use crate::ui::components::icon_button;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::Glyph;
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, scrollable, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(state: &'a State, env: &ViewEnv<'a>) -> Element<'a, Message> {
    let i18n = env.i18n;

    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr("drawer-title"))
                .size(typography::TITLE_SM)
                .width(Length::Fill),
        )
        .push(icon_button(
            Glyph::Cross,
            i18n.tr("drawer-close-tooltip"),
            Some(Message::ToggleDrawer),
            false,
            env.is_dark,
        ));

    let add = button(Text::new(i18n.tr("drawer-add-bookmark")))
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .style(styles::button::primary)
        .on_press(Message::AddBookmark);

    let rows: Element<'a, Message> = if state.bookmarks().is_empty() {
        Text::new(i18n.tr("drawer-empty"))
            .size(typography::BODY_SM)
            .color(theme::muted_text_color())
            .into()
    } else {
        Column::with_children(state.bookmarks().iter().map(|bookmark| {
            match state.form() {
                Some(form) if form.page == bookmark.page => edit_form(form, i18n),
                _ => bookmark_row(bookmark, env),
            }
        }))
        .spacing(spacing::XS)
        .into()
    };

    let content = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(add)
        .push(scrollable(rows).height(Length::Fill));

    Container::new(content)
        .width(Length::Fixed(sizing::DRAWER_WIDTH))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

/// Label shown for a bookmark: its title, or "Page N" when untitled.
pub fn label(bookmark: &Bookmark, i18n: &I18n) -> String {
    match &bookmark.title {
        Some(title) => format!("{} - {}", bookmark.page, title),
        None => i18n.tr_with_args("bookmark-default-label", &[("page", &bookmark.page.to_string())]),
    }
}

fn bookmark_row<'a>(bookmark: &'a Bookmark, env: &ViewEnv<'a>) -> Element<'a, Message> {
    let i18n = env.i18n;
    let go_to = button(Text::new(label(bookmark, i18n)).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::unselected)
        .on_press(Message::BookmarkSelected(bookmark.page));

    Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(go_to)
        .push(icon_button(
            Glyph::Pencil,
            i18n.tr("drawer-edit-tooltip"),
            Some(Message::EditBookmark(bookmark.page)),
            false,
            env.is_dark,
        ))
        .push(icon_button(
            Glyph::Trash,
            i18n.tr("drawer-remove-tooltip"),
            Some(Message::RemoveBookmark(bookmark.page)),
            false,
            env.is_dark,
        ))
        .into()
}

fn edit_form<'a>(form: &'a BookmarkForm, i18n: &'a I18n) -> Element<'a, Message> {
    let page_input = text_input(&i18n.tr("drawer-page-placeholder"), &form.page_input)
        .on_input(Message::EditPageChanged)
        .on_submit(Message::EditSubmitted)
        .padding(spacing::XS)
        .size(typography::BODY);

    let title_input = text_input(&i18n.tr("drawer-title-placeholder"), &form.title_input)
        .on_input(Message::EditTitleChanged)
        .on_submit(Message::EditSubmitted)
        .padding(spacing::XS)
        .size(typography::BODY);

    let buttons = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("drawer-save")))
                .style(styles::button::primary)
                .on_press(Message::EditSubmitted),
        )
        .push(
            button(Text::new(i18n.tr("drawer-cancel")))
                .style(styles::button::unselected)
                .on_press(Message::EditCancelled),
        );

    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("drawer-page-label")).size(typography::CAPTION))
        .push(page_input)
        .push(Text::new(i18n.tr("drawer-title-label")).size(typography::CAPTION))
        .push(title_input);

    if let Some(error) = form.error {
        let message = match error {
            FormError::OutOfRange { count } => {
                i18n.tr_with_args("bookmark-edit-out-of-range", &[("count", &count.to_string())])
            }
            FormError::Duplicate => i18n.tr("bookmark-edit-duplicate"),
        };
        column = column.push(
            Text::new(message)
                .size(typography::BODY_SM)
                .color(theme::error_text_color()),
        );
    }

    Container::new(column.push(buttons))
        .padding(spacing::XS)
        .style(styles::container::toolbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untitled_bookmark_uses_page_label() {
        let i18n = I18n::default();
        let bookmark = Bookmark::new(4, None);
        assert!(label(&bookmark, &i18n).contains('4'));
        assert!(!label(&bookmark, &i18n).starts_with("MISSING"));
    }

    #[test]
    fn titled_bookmark_shows_page_and_title() {
        let i18n = I18n::default();
        let bookmark = Bookmark::new(12, Some("Summary".to_string()));
        assert_eq!(label(&bookmark, &i18n), "12 - Summary");
    }
}
