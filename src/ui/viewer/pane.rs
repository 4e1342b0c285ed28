// SPDX-License-Identifier: MPL-2.0
//! Scrollable list of pages.

use super::component::{Message, State, SCROLLABLE_ID};
use super::geometry::{PAGE_GAP, PAGE_PADDING};
use super::ViewEnv;
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{Column, Container, Id, Image, Scrollable, Text};
use iced::{alignment, Element, Length, Theme};

pub fn view<'a>(state: &'a State, env: &ViewEnv<'a>) -> Element<'a, Message> {
    let layout = state.layout();
    let width = layout.page_width();

    let pages = (0..state.page_count()).map(|index| {
        let height = layout.page_height(index);
        match state.cached_page(index) {
            Some(page) => Image::new(page.handle.clone())
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .into(),
            None => placeholder(index, width, height, env),
        }
    });

    let list = Column::with_children(pages)
        .spacing(PAGE_GAP)
        .padding(PAGE_PADDING)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let scrollable = Scrollable::new(list)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Vertical(Scrollbar::new()))
        .on_scroll(|viewport: Viewport| Message::ViewportChanged {
            bounds: viewport.bounds(),
            offset: viewport.absolute_offset(),
        });

    Container::new(scrollable)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::page_surface_style)
        .into()
}

/// Same footprint as the page, showing its number until it is rendered.
fn placeholder<'a>(index: usize, width: f32, height: f32, env: &ViewEnv<'a>) -> Element<'a, Message> {
    let label = env
        .i18n
        .tr_with_args("viewer-page-loading", &[("page", &(index + 1).to_string())]);

    Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|theme: &Theme| styles::container::placeholder(theme::page_placeholder_color(theme))(theme))
        .into()
}
