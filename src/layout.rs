// SPDX-License-Identifier: MPL-2.0
//! Fitting a page bitmap into a view.
//!
//! The editor and the capture screen both show a single page scaled to fit
//! the view: the page width is matched first, and if the scaled height would
//! overflow the height is matched instead. The scaled page is centered.

use iced::{Point, Rectangle, Size, Vector};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitLayout {
    /// View pixels per page pixel.
    pub scale: f32,
    /// Top-left corner of the page inside the view.
    pub origin: Point,
    /// Size of the scaled page.
    pub size: Size,
}

impl FitLayout {
    pub fn fit(page: Size, view: Size) -> Self {
        if page.width <= 0.0 || page.height <= 0.0 || view.width <= 0.0 || view.height <= 0.0 {
            return Self {
                scale: 1.0,
                origin: Point::ORIGIN,
                size: page,
            };
        }

        let mut scale = view.width / page.width;
        if page.height * scale > view.height {
            scale = view.height / page.height;
        }

        let size = Size::new(page.width * scale, page.height * scale);
        let origin = Point::new(
            (view.width - size.width) / 2.0,
            (view.height - size.height) / 2.0,
        );

        Self {
            scale,
            origin,
            size,
        }
    }

    /// Offset of the page inside the view.
    pub fn offset(&self) -> Vector {
        Vector::new(self.origin.x, self.origin.y)
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.origin, self.size)
    }

    /// Maps a view rectangle to page pixels, clipped to the page.
    ///
    /// Returns `None` when nothing of the rectangle lies on the page.
    pub fn view_to_page(&self, rect: Rectangle, page: Size) -> Option<Rectangle> {
        let clipped = rect.intersection(&self.bounds())?;
        let x = (clipped.x - self.origin.x) / self.scale;
        let y = (clipped.y - self.origin.y) / self.scale;
        let page_rect = Rectangle {
            x: x.max(0.0),
            y: y.max(0.0),
            width: (clipped.width / self.scale).min(page.width - x.max(0.0)),
            height: (clipped.height / self.scale).min(page.height - y.max(0.0)),
        };
        (page_rect.width > 0.0 && page_rect.height > 0.0).then_some(page_rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn wide_view_fits_height() {
        let layout = FitLayout::fit(Size::new(100.0, 200.0), Size::new(400.0, 300.0));
        assert!(approx(layout.scale, 1.5));
        assert!(approx(layout.size.width, 150.0));
        assert!(approx(layout.origin.x, 125.0));
        assert!(approx(layout.origin.y, 0.0));
    }

    #[test]
    fn tall_view_fits_width() {
        let layout = FitLayout::fit(Size::new(100.0, 200.0), Size::new(200.0, 1000.0));
        assert!(approx(layout.scale, 2.0));
        assert!(approx(layout.origin.x, 0.0));
        assert!(approx(layout.origin.y, 300.0));
    }

    #[test]
    fn degenerate_sizes_use_identity() {
        let layout = FitLayout::fit(Size::new(0.0, 10.0), Size::new(100.0, 100.0));
        assert!(approx(layout.scale, 1.0));
        assert_eq!(layout.origin, Point::ORIGIN);
    }

    #[test]
    fn view_rect_maps_back_to_page_pixels() {
        let page = Size::new(100.0, 200.0);
        let layout = FitLayout::fit(page, Size::new(200.0, 1000.0));
        // Page occupies x 0..200, y 300..700 at scale 2.
        let rect = Rectangle::new(Point::new(20.0, 320.0), Size::new(100.0, 40.0));
        let mapped = layout.view_to_page(rect, page).expect("on page");
        assert!(approx(mapped.x, 10.0));
        assert!(approx(mapped.y, 10.0));
        assert!(approx(mapped.width, 50.0));
        assert!(approx(mapped.height, 20.0));
    }

    #[test]
    fn view_rect_is_clipped_to_the_page() {
        let page = Size::new(100.0, 200.0);
        let layout = FitLayout::fit(page, Size::new(200.0, 1000.0));
        let rect = Rectangle::new(Point::new(-50.0, 0.0), Size::new(100.0, 400.0));
        let mapped = layout.view_to_page(rect, page).expect("overlaps page");
        assert!(approx(mapped.x, 0.0));
        assert!(approx(mapped.y, 0.0));
        assert!(approx(mapped.width, 25.0));
        assert!(approx(mapped.height, 50.0));
    }

    #[test]
    fn view_rect_off_the_page_maps_to_nothing() {
        let page = Size::new(100.0, 200.0);
        let layout = FitLayout::fit(page, Size::new(200.0, 1000.0));
        let rect = Rectangle::new(Point::new(0.0, 0.0), Size::new(50.0, 100.0));
        assert!(layout.view_to_page(rect, page).is_none());
    }
}
