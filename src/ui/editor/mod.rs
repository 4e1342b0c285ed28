// SPDX-License-Identifier: MPL-2.0
//! Page annotation screen.
//!
//! Shows one page fitted to the canvas and lets the user draw freehand
//! strokes, straight lines and highlights over it. Saving flattens the page
//! and its edits into an image the application hands to the save prompt.

mod canvas;
mod messages;
mod toolbar;

pub use messages::{CanvasMessage, Event, Message, ToolbarMessage};

use crate::annotation::{self, Annotator};
use crate::capture::Handedness;
use crate::document::RenderedPage;
use crate::i18n::fluent::I18n;
use crate::layout::FitLayout;
use crate::ui::notifications::Notification;
use canvas::EditorCanvas;
use iced::widget::{Canvas, Column};
use iced::{Element, Length, Size};
use std::sync::Arc;

/// Contextual data needed to render the editor view.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub is_dark: bool,
}

#[derive(Debug, Clone)]
pub struct State {
    page: Arc<RenderedPage>,
    annotator: Annotator,
    /// Fixed by the first canvas size report.
    layout: Option<FitLayout>,
    handedness: Handedness,
}

impl State {
    pub fn new(page: Arc<RenderedPage>, handedness: Handedness) -> Self {
        Self {
            page,
            annotator: Annotator::default(),
            layout: None,
            handedness,
        }
    }

    pub fn page(&self) -> &RenderedPage {
        &self.page
    }

    pub fn annotator(&self) -> &Annotator {
        &self.annotator
    }

    pub fn layout(&self) -> Option<FitLayout> {
        self.layout
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    pub fn set_handedness(&mut self, handedness: Handedness) {
        self.handedness = handedness;
    }

    /// Ctrl+Z from the application keyboard subscription.
    pub fn handle_undo(&mut self) {
        if !self.annotator.undo() {
            log::debug!("Nothing to undo");
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Toolbar(message) => self.handle_toolbar(message),
            Message::Canvas(message) => {
                self.handle_canvas(message);
                Event::None
            }
        }
    }

    fn handle_toolbar(&mut self, message: ToolbarMessage) -> Event {
        match message {
            ToolbarMessage::SelectTool(tool) => self.annotator.select_tool(tool),
            ToolbarMessage::ToggleTray => self.annotator.toggle_tray(),
            ToolbarMessage::SetWeight(weight) => self.annotator.set_weight(weight),
            ToolbarMessage::SetColor(color) => self.annotator.set_color(color),
            ToolbarMessage::Undo => self.handle_undo(),
            ToolbarMessage::Save => return self.flatten(),
            ToolbarMessage::BackToViewer => return Event::ExitEditor,
        }
        Event::None
    }

    fn handle_canvas(&mut self, message: CanvasMessage) {
        match message {
            CanvasMessage::Ready(size) => {
                if self.layout.is_none() {
                    let page = Size::new(self.page.width as f32, self.page.height as f32);
                    let layout = FitLayout::fit(page, size);
                    log::debug!(
                        "Editor layout for page {}: scale {:.3} in {}x{}",
                        self.page.index + 1,
                        layout.scale,
                        size.width,
                        size.height
                    );
                    // Edits made before the first layout are meaningless.
                    self.annotator = Annotator::new(layout.offset());
                    self.layout = Some(layout);
                }
            }
            CanvasMessage::Pressed(point) => self.annotator.press(point),
            CanvasMessage::Moved(point) => self.annotator.drag(point),
            CanvasMessage::Released => self.annotator.release(),
        }
    }

    fn flatten(&self) -> Event {
        let scale = self.layout.map_or(1.0, |layout| layout.scale);
        match annotation::flatten(&self.page, scale, self.annotator.edits()) {
            Ok(image) => Event::SaveRequested(image),
            Err(err) => {
                log::error!("Failed to flatten page {}: {err}", self.page.index + 1);
                Event::Notify(Notification::error(err.i18n_key()))
            }
        }
    }

    pub fn view<'a>(&'a self, env: &ViewEnv<'a>) -> Element<'a, Message> {
        let canvas = Canvas::new(EditorCanvas {
            page: &self.page,
            layout: self.layout,
            annotator: &self.annotator,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        Column::new()
            .push(toolbar::view(self, env).map(Message::Toolbar))
            .push(canvas)
            .into()
    }
}
