// SPDX-License-Identifier: MPL-2.0
//! Window icon and SVG rasterization.
//!
//! The branding SVG is embedded and rasterized at runtime so packaging does
//! not need to ship bitmaps. Failure to render yields no icon rather than an
//! error.

use iced::window::{icon, Icon};
use resvg::usvg;

const BRANDING_SVG: &str = include_str!("../assets/branding/iced_folio.svg");

/// Window icon size in pixels.
const WINDOW_ICON_SIZE: u32 = 128;

/// Rasterizes an SVG document into a square RGBA pixmap of `size` pixels.
pub fn rasterize_svg(source: &str, size: u32) -> Option<tiny_skia::Pixmap> {
    let tree = usvg::Tree::from_data(source.as_bytes(), &usvg::Options::default()).ok()?;

    let orig_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / orig_size.width(),
        size as f32 / orig_size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap)
}

/// Straight (non premultiplied) RGBA bytes of `pixmap`, as expected by iced.
pub fn straight_rgba(pixmap: &tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect()
}

pub fn load_window_icon() -> Option<Icon> {
    let pixmap = rasterize_svg(BRANDING_SVG, WINDOW_ICON_SIZE)?;
    icon::from_rgba(straight_rgba(&pixmap), WINDOW_ICON_SIZE, WINDOW_ICON_SIZE).ok()
}
