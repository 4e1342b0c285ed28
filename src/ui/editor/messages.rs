// SPDX-License-Identifier: MPL-2.0
//! Editor message/event types re-exported by the facade.

use crate::annotation::{LineWeight, Rgba, Tool};
use crate::ui::notifications::Notification;
use iced::{Point, Size};

/// Toolbar-specific messages.
#[derive(Debug, Clone)]
pub enum ToolbarMessage {
    SelectTool(Tool),
    ToggleTray,
    SetWeight(LineWeight),
    SetColor(Rgba),
    Undo,
    Save,
    BackToViewer,
}

/// Pointer input from the canvas, in canvas coordinates.
#[derive(Debug, Clone)]
pub enum CanvasMessage {
    /// First report of the canvas size; fixes the fit layout.
    Ready(Size),
    Pressed(Point),
    Moved(Point),
    Released,
}

#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(ToolbarMessage),
    Canvas(CanvasMessage),
}

impl From<ToolbarMessage> for Message {
    fn from(message: ToolbarMessage) -> Self {
        Message::Toolbar(message)
    }
}

impl From<CanvasMessage> for Message {
    fn from(message: CanvasMessage) -> Self {
        Message::Canvas(message)
    }
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The flattened page, ready for the save prompt.
    SaveRequested(image_rs::RgbaImage),
    ExitEditor,
    Notify(Notification),
}
