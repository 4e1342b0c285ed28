// SPDX-License-Identifier: MPL-2.0
//! Canvas showing the page and its edits, and turning pointer input into
//! editor messages.

use super::{CanvasMessage, Message};
use crate::annotation::{Annotator, Edit, Shape};
use crate::document::RenderedPage;
use crate::layout::FitLayout;
use crate::ui::theme;
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, LineCap, LineJoin, Path, Stroke};
use iced::widget::Action;
use iced::{Event, Point, Rectangle, Renderer, Theme, Vector};

pub struct EditorCanvas<'a> {
    pub page: &'a RenderedPage,
    pub layout: Option<FitLayout>,
    pub annotator: &'a Annotator,
}

impl canvas::Program<Message> for EditorCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        if self.layout.is_none() {
            return Some(Action::publish(Message::Canvas(CanvasMessage::Ready(
                bounds.size(),
            ))));
        }

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                Some(Action::publish(Message::Canvas(CanvasMessage::Pressed(position))).and_capture())
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) if self.annotator.is_gesture_active() => {
                match cursor.position_in(bounds) {
                    Some(position) => Some(
                        Action::publish(Message::Canvas(CanvasMessage::Moved(position))).and_capture(),
                    ),
                    // Leaving the canvas ends the gesture.
                    None => Some(Action::publish(Message::Canvas(CanvasMessage::Released)).and_capture()),
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Mouse(mouse::Event::CursorLeft)
                if self.annotator.is_gesture_active() =>
            {
                Some(Action::publish(Message::Canvas(CanvasMessage::Released)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), theme::page_surface_color(theme));

        if let Some(layout) = self.layout {
            let pan = self.annotator.pan();
            frame.draw_image(
                Rectangle::new(Point::ORIGIN + pan, layout.size),
                canvas::Image::new(self.page.handle.clone()),
            );
            for edit in self.annotator.edits() {
                draw_edit(&mut frame, edit, pan);
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if !cursor.is_over(bounds) {
            return mouse::Interaction::default();
        }
        match self.annotator.tool() {
            crate::annotation::Tool::Move if self.annotator.is_gesture_active() => mouse::Interaction::Grabbing,
            crate::annotation::Tool::Move => mouse::Interaction::Grab,
            _ => mouse::Interaction::Crosshair,
        }
    }
}

/// Strokes an edit the same way the flattened export does.
fn draw_edit(frame: &mut Frame, edit: &Edit, pan: Vector) {
    let (path, line_join) = match &edit.shape {
        Shape::Line { from, to } => (Path::line(*from + pan, *to + pan), LineJoin::default()),
        Shape::Freehand { points } => {
            if points.len() < 2 {
                return;
            }
            let path = Path::new(|builder| {
                builder.move_to(points[0] + pan);
                for point in &points[1..] {
                    builder.line_to(*point + pan);
                }
            });
            (path, LineJoin::Miter)
        }
    };

    frame.stroke(
        &path,
        Stroke::default()
            .with_color(edit.stroke.color.into())
            .with_width(edit.stroke.width)
            .with_line_cap(LineCap::Butt)
            .with_line_join(line_join),
    );
}
