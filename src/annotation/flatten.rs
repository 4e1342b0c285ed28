// SPDX-License-Identifier: MPL-2.0
//! Rasterizes a page and its edits into a single image.

use super::{Edit, Shape};
use crate::document::RenderedPage;
use crate::error::{Error, Result};
use tiny_skia::{
    Color, FilterQuality, IntSize, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke,
    Transform,
};

/// Draws the page at `scale` on a white background, then every edit in order.
///
/// The output measures the page size times `scale`, which is the size the
/// page had on screen, so edit coordinates need no conversion.
pub fn flatten(page: &RenderedPage, scale: f32, edits: &[Edit]) -> Result<image_rs::RgbaImage> {
    let width = ((page.width as f32 * scale).round() as u32).max(1);
    let height = ((page.height as f32 * scale).round() as u32).max(1);

    let mut canvas = Pixmap::new(width, height)
        .ok_or_else(|| Error::Image(format!("Cannot allocate {width}x{height} canvas")))?;
    canvas.fill(Color::WHITE);

    let size = IntSize::from_wh(page.width, page.height)
        .ok_or_else(|| Error::Image("Page has no pixels".to_string()))?;
    // Rendered pages are opaque, so straight and premultiplied RGBA agree.
    let source = Pixmap::from_vec(page.rgba().to_vec(), size)
        .ok_or_else(|| Error::Image("Page buffer does not match its size".to_string()))?;
    canvas.draw_pixmap(
        0,
        0,
        source.as_ref(),
        &PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        },
        Transform::from_scale(scale, scale),
        None,
    );

    for edit in edits {
        draw_edit(&mut canvas, edit);
    }

    // The background is opaque, so the result needs no demultiplying.
    image_rs::RgbaImage::from_raw(width, height, canvas.take())
        .ok_or_else(|| Error::Image("Canvas buffer does not match its size".to_string()))
}

fn draw_edit(canvas: &mut Pixmap, edit: &Edit) {
    let mut builder = PathBuilder::new();
    let stroke = match &edit.shape {
        Shape::Line { from, to } => {
            builder.move_to(from.x, from.y);
            builder.line_to(to.x, to.y);
            Stroke {
                width: edit.stroke.width,
                ..Stroke::default()
            }
        }
        Shape::Freehand { points } => {
            let Some((first, rest)) = points.split_first() else {
                return;
            };
            builder.move_to(first.x, first.y);
            for point in rest {
                builder.line_to(point.x, point.y);
            }
            Stroke {
                width: edit.stroke.width,
                line_join: LineJoin::Miter,
                ..Stroke::default()
            }
        }
    };

    // A press without movement produces no drawable path.
    let Some(path) = builder.finish() else {
        return;
    };

    let color = edit.stroke.color;
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    canvas.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{Rgba, Stroke as EditStroke};
    use iced::{Point, Vector};

    fn gray_page(width: u32, height: u32) -> RenderedPage {
        let pixels = [200, 200, 200, 255].repeat((width * height) as usize);
        RenderedPage::from_rgba(0, width, height, pixels)
    }

    fn line(from: Point, to: Point, color: Rgba, width: f32) -> Edit {
        Edit {
            shape: Shape::Line { from, to },
            stroke: EditStroke { color, width },
            translation: Vector::ZERO,
        }
    }

    #[test]
    fn output_has_the_scaled_page_size() {
        let image = flatten(&gray_page(10, 20), 2.0, &[]).expect("flatten");
        assert_eq!(image.dimensions(), (20, 40));
        assert_eq!(image.get_pixel(5, 5).0, [200, 200, 200, 255]);
    }

    #[test]
    fn transparent_page_shows_white_background() {
        let page = RenderedPage::from_rgba(0, 4, 4, vec![0; 4 * 4 * 4]);
        let image = flatten(&page, 1.0, &[]).expect("flatten");
        assert_eq!(image.get_pixel(1, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn line_is_drawn_over_the_page() {
        let edit = line(
            Point::new(0.0, 10.0),
            Point::new(20.0, 10.0),
            Rgba::opaque(255, 0, 0),
            4.0,
        );
        let image = flatten(&gray_page(20, 20), 1.0, &[edit]).expect("flatten");
        assert_eq!(image.get_pixel(10, 10).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(10, 2).0, [200, 200, 200, 255]);
    }

    #[test]
    fn later_edits_paint_over_earlier_ones() {
        let red = line(Point::new(0.0, 5.0), Point::new(10.0, 5.0), Rgba::opaque(255, 0, 0), 4.0);
        let blue = line(Point::new(0.0, 5.0), Point::new(10.0, 5.0), Rgba::opaque(0, 0, 255), 4.0);
        let image = flatten(&gray_page(10, 10), 1.0, &[red, blue]).expect("flatten");
        assert_eq!(image.get_pixel(5, 5).0, [0, 0, 255, 255]);
    }

    #[test]
    fn single_point_freehand_is_skipped() {
        let edit = Edit {
            shape: Shape::Freehand {
                points: vec![Point::new(3.0, 3.0)],
            },
            stroke: EditStroke::default(),
            translation: Vector::ZERO,
        };
        let image = flatten(&gray_page(6, 6), 1.0, &[edit]).expect("flatten");
        assert_eq!(image.get_pixel(3, 3).0, [200, 200, 200, 255]);
    }
}
