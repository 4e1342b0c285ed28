// SPDX-License-Identifier: MPL-2.0
//! Canvas showing the page under the crop overlay.

use super::{CanvasMessage, Message};
use crate::capture::CropRegion;
use crate::document::RenderedPage;
use crate::layout::FitLayout;
use crate::ui::design_tokens::{border, sizing};
use crate::ui::theme;
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{Event, Point, Rectangle, Renderer, Size, Theme};

pub struct CaptureCanvas<'a> {
    pub page: &'a RenderedPage,
    pub layout: Option<FitLayout>,
    pub region: Option<&'a CropRegion>,
}

impl canvas::Program<Message> for CaptureCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let Some(region) = self.region else {
            return Some(Action::publish(Message::Canvas(CanvasMessage::Ready(
                bounds.size(),
            ))));
        };

        let dragging = region.selected().is_some();
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                Some(Action::publish(Message::Canvas(CanvasMessage::Pressed(position))).and_capture())
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) if dragging => {
                let position = cursor.position_in(bounds)?;
                Some(Action::publish(Message::Canvas(CanvasMessage::Moved(position))).and_capture())
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Mouse(mouse::Event::CursorLeft)
                if dragging =>
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
            frame.draw_image(layout.bounds(), canvas::Image::new(self.page.handle.clone()));
        }

        if let Some(region) = self.region {
            draw_overlay(&mut frame, bounds.size(), region);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match self.region.and_then(CropRegion::selected) {
            Some(_) => mouse::Interaction::Grabbing,
            None => mouse::Interaction::default(),
        }
    }
}

/// Shades everything outside the selection, then outlines it and its thumbs.
fn draw_overlay(frame: &mut Frame, view: Size, region: &CropRegion) {
    let rect = region.rect();
    let shade = theme::crop_shade_color();

    let bands = [
        Rectangle::new(Point::ORIGIN, Size::new(view.width, rect.y)),
        Rectangle::new(
            Point::new(0.0, rect.y + rect.height),
            Size::new(view.width, (view.height - rect.y - rect.height).max(0.0)),
        ),
        Rectangle::new(Point::new(0.0, rect.y), Size::new(rect.x, rect.height)),
        Rectangle::new(
            Point::new(rect.x + rect.width, rect.y),
            Size::new((view.width - rect.x - rect.width).max(0.0), rect.height),
        ),
    ];
    for band in bands {
        if band.width > 0.0 && band.height > 0.0 {
            frame.fill_rectangle(band.position(), band.size(), shade);
        }
    }

    frame.stroke(
        &Path::rectangle(rect.position(), rect.size()),
        Stroke::default()
            .with_color(theme::crop_border_color())
            .with_width(border::WIDTH_MD),
    );

    for thumb in [region.left_thumb(), region.right_thumb()] {
        let half = sizing::CROP_THUMB / 2.0;
        let path = Path::rectangle(
            Point::new(thumb.x - half, thumb.y - half),
            Size::new(sizing::CROP_THUMB, sizing::CROP_THUMB),
        );
        frame.fill(&path, theme::crop_thumb_color());
        frame.stroke(
            &path,
            Stroke::default()
                .with_color(theme::crop_thumb_border_color())
                .with_width(border::WIDTH_SM),
        );
    }
}
