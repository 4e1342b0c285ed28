// SPDX-License-Identifier: MPL-2.0
//! Crop region selection for the capture screen.
//!
//! The region is resized through two thumbs sitting on opposite corners.
//! Which corners they use depends on handedness, so that the lower thumb is
//! always on the side of the user's dominant hand.

use crate::config::CROP_THUMB_RADIUS;
use crate::document::RenderedPage;
use crate::error::{Error, Result};
use crate::layout::FitLayout;
use iced::{Point, Rectangle, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Handedness {
    #[default]
    Right,
    Left,
}

impl Handedness {
    pub fn from_left_handed(left_handed: bool) -> Self {
        if left_handed {
            Handedness::Left
        } else {
            Handedness::Right
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thumb {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CropRegion {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    handedness: Handedness,
    selected: Option<Thumb>,
}

impl CropRegion {
    /// Starts with the inner two thirds of each dimension selected.
    pub fn new(view: Size, handedness: Handedness) -> Self {
        Self {
            left: view.width / 6.0,
            top: view.height / 6.0,
            right: view.width / 6.0 * 5.0,
            bottom: view.height / 6.0 * 5.0,
            handedness,
            selected: None,
        }
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    pub fn selected(&self) -> Option<Thumb> {
        self.selected
    }

    pub fn left_thumb(&self) -> Point {
        match self.handedness {
            Handedness::Right => Point::new(self.left, self.bottom),
            Handedness::Left => Point::new(self.left, self.top),
        }
    }

    pub fn right_thumb(&self) -> Point {
        match self.handedness {
            Handedness::Right => Point::new(self.right, self.top),
            Handedness::Left => Point::new(self.right, self.bottom),
        }
    }

    /// Selects the thumb under `point`, if any. The left thumb wins ties.
    pub fn press(&mut self, point: Point) {
        self.selected = if hits(self.left_thumb(), point) {
            Some(Thumb::Left)
        } else if hits(self.right_thumb(), point) {
            Some(Thumb::Right)
        } else {
            None
        };
    }

    /// Moves the selected thumb unless that would flip the region.
    pub fn drag(&mut self, point: Point) {
        let Some(thumb) = self.selected else {
            return;
        };

        match (thumb, self.handedness) {
            (Thumb::Left, Handedness::Right) => {
                if point.x <= self.right && point.y >= self.top {
                    self.left = point.x;
                    self.bottom = point.y;
                }
            }
            (Thumb::Left, Handedness::Left) => {
                if point.x <= self.right && point.y <= self.bottom {
                    self.left = point.x;
                    self.top = point.y;
                }
            }
            (Thumb::Right, Handedness::Right) => {
                if point.x >= self.left && point.y <= self.bottom {
                    self.right = point.x;
                    self.top = point.y;
                }
            }
            (Thumb::Right, Handedness::Left) => {
                if point.x >= self.left && point.y >= self.top {
                    self.right = point.x;
                    self.bottom = point.y;
                }
            }
        }
    }

    pub fn release(&mut self) {
        self.selected = None;
    }

    /// The selected area, spanned by the two thumbs.
    pub fn rect(&self) -> Rectangle {
        let a = self.left_thumb();
        let b = self.right_thumb();
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Rectangle {
            x,
            y,
            width: a.x.max(b.x) - x,
            height: a.y.max(b.y) - y,
        }
    }
}

fn hits(thumb: Point, point: Point) -> bool {
    (point.x - thumb.x).abs() <= CROP_THUMB_RADIUS && (point.y - thumb.y).abs() <= CROP_THUMB_RADIUS
}

/// Cuts the part of `page` shown under `rect` (view coordinates).
///
/// Returns `Ok(None)` when `rect` does not overlap the page.
pub fn crop_page(
    page: &RenderedPage,
    layout: &FitLayout,
    rect: Rectangle,
) -> Result<Option<image_rs::RgbaImage>> {
    let page_size = Size::new(page.width as f32, page.height as f32);
    let Some(area) = layout.view_to_page(rect, page_size) else {
        return Ok(None);
    };

    let x = area.x.floor() as u32;
    let y = area.y.floor() as u32;
    let width = (area.width.round() as u32).clamp(1, page.width.saturating_sub(x).max(1));
    let height = (area.height.round() as u32).clamp(1, page.height.saturating_sub(y).max(1));

    let image = page
        .to_rgba_image()
        .ok_or_else(|| Error::Image("Page buffer does not match its size".to_string()))?;
    log::debug!("Cropping page {} at {}x{}+{}+{}", page.index + 1, width, height, x, y);
    Ok(Some(image_rs::imageops::crop_imm(&image, x, y, width, height).to_image()))
}
