// SPDX-License-Identifier: MPL-2.0
//! Page capture screen: select a rectangle of one page and save it.

mod canvas;

use crate::capture::{self, CropRegion, Handedness};
use crate::document::RenderedPage;
use crate::i18n::fluent::I18n;
use crate::layout::FitLayout;
use crate::ui::components::icon_button;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::Glyph;
use crate::ui::notifications::Notification;
use crate::ui::styles;
use canvas::CaptureCanvas;
use iced::widget::{button, Canvas, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Point, Size};
use std::sync::Arc;

pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub is_dark: bool,
}

#[derive(Debug, Clone)]
pub enum CanvasMessage {
    Ready(Size),
    Pressed(Point),
    Moved(Point),
    Released,
}

#[derive(Debug, Clone)]
pub enum Message {
    Canvas(CanvasMessage),
    Capture,
    Back,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    SaveRequested(image_rs::RgbaImage),
    Exit,
    Notify(Notification),
}

#[derive(Debug, Clone)]
pub struct State {
    page: Arc<RenderedPage>,
    layout: Option<FitLayout>,
    region: Option<CropRegion>,
    handedness: Handedness,
}

impl State {
    pub fn new(page: Arc<RenderedPage>, handedness: Handedness) -> Self {
        Self {
            page,
            layout: None,
            region: None,
            handedness,
        }
    }

    pub fn region(&self) -> Option<&CropRegion> {
        self.region.as_ref()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Canvas(message) => {
                self.handle_canvas(message);
                Event::None
            }
            Message::Capture => self.capture(),
            Message::Back => Event::Exit,
        }
    }

    fn handle_canvas(&mut self, message: CanvasMessage) {
        match message {
            CanvasMessage::Ready(size) => {
                if self.region.is_none() {
                    let page = Size::new(self.page.width as f32, self.page.height as f32);
                    self.layout = Some(FitLayout::fit(page, size));
                    self.region = Some(CropRegion::new(size, self.handedness));
                }
            }
            CanvasMessage::Pressed(point) => {
                if let Some(region) = self.region.as_mut() {
                    region.press(point);
                }
            }
            CanvasMessage::Moved(point) => {
                if let Some(region) = self.region.as_mut() {
                    region.drag(point);
                }
            }
            CanvasMessage::Released => {
                if let Some(region) = self.region.as_mut() {
                    region.release();
                }
            }
        }
    }

    fn capture(&self) -> Event {
        let (Some(layout), Some(region)) = (self.layout, self.region.as_ref()) else {
            return Event::None;
        };
        match capture::crop_page(&self.page, &layout, region.rect()) {
            Ok(Some(image)) => Event::SaveRequested(image),
            Ok(None) => {
                log::warn!("Capture selection misses page {}", self.page.index + 1);
                Event::Notify(Notification::warning("notification-capture-outside-page"))
            }
            Err(err) => {
                log::error!("Capture of page {} failed: {err}", self.page.index + 1);
                Event::Notify(Notification::error(err.i18n_key()))
            }
        }
    }

    pub fn view<'a>(&'a self, env: &ViewEnv<'a>) -> Element<'a, Message> {
        let i18n = env.i18n;

        let capture = button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(crate::ui::icons::sized(
                    crate::ui::icons::light(Glyph::Crop),
                    sizing::ICON_SM,
                ))
                .push(Text::new(i18n.tr("capture-button")).size(typography::BODY)),
        )
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press_maybe(self.region.is_some().then_some(Message::Capture));

        let toolbar = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icon_button(
                Glyph::ArrowLeft,
                i18n.tr("capture-back-tooltip"),
                Some(Message::Back),
                false,
                env.is_dark,
            ))
            .push(Text::new(i18n.tr("capture-hint")).size(typography::BODY_SM))
            .push(Space::new().width(Length::Fill))
            .push(capture);

        let canvas = Canvas::new(CaptureCanvas {
            page: &self.page,
            layout: self.layout,
            region: self.region.as_ref(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        Column::new()
            .push(
                Container::new(toolbar)
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
                    .padding([spacing::XS, spacing::SM])
                    .align_y(alignment::Vertical::Center)
                    .style(styles::container::toolbar),
            )
            .push(canvas)
            .into()
    }
}
