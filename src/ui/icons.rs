// SPDX-License-Identifier: MPL-2.0
//! Toolbar and notification icons.
//!
//! Glyphs are small stroke-only SVG fragments on a 24 unit grid. They are
//! rasterized once on first use and the handles cached with `OnceLock`.
//!
//! # Variants
//!
//! - [`dark`] - dark strokes, for light surfaces
//! - [`light`] - white strokes, for dark surfaces and selected buttons
//! - [`for_theme`] - picks whichever contrasts with the theme background
//! - [`success`], [`info`], [`warning`] - colored, for toasts
//!
//! # Naming Convention
//!
//! Glyphs are named by what they look like (`Crop`, `Trash`), not by the
//! action that uses them.

use iced::widget::image::{Handle, Image};
use iced::Length;
use std::sync::OnceLock;

/// Raster edge in pixels. Twice the largest displayed size, so icons stay
/// sharp on high density displays.
const RASTER_SIZE: u32 = 64;

const DARK_STROKE: &str = "#1a1a1a";
const LIGHT_STROKE: &str = "#ffffff";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    FolderOpen,
    Document,
    Cog,
    Crop,
    Pencil,
    Bookmark,
    BookmarkPlus,
    List,
    Cross,
    Undo,
    Download,
    ArrowLeft,
    Move,
    Line,
    Highlighter,
    Trash,
    Swap,
    Check,
}

impl Glyph {
    pub const ALL: [Glyph; 18] = [
        Glyph::FolderOpen,
        Glyph::Document,
        Glyph::Cog,
        Glyph::Crop,
        Glyph::Pencil,
        Glyph::Bookmark,
        Glyph::BookmarkPlus,
        Glyph::List,
        Glyph::Cross,
        Glyph::Undo,
        Glyph::Download,
        Glyph::ArrowLeft,
        Glyph::Move,
        Glyph::Line,
        Glyph::Highlighter,
        Glyph::Trash,
        Glyph::Swap,
        Glyph::Check,
    ];

    fn body(self) -> &'static str {
        match self {
            Glyph::FolderOpen => {
                r#"<path d="M3 7a2 2 0 0 1 2-2h4l2 2h8a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/>"#
            }
            Glyph::Document => {
                r#"<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><path d="M14 2v6h6M8 13h8M8 17h5"/>"#
            }
            Glyph::Cog => {
                r#"<circle cx="12" cy="12" r="3"/><path d="M12 2v3M12 19v3M2 12h3M19 12h3M4.9 4.9 7 7M17 17l2.1 2.1M4.9 19.1 7 17M17 7l2.1-2.1"/>"#
            }
            Glyph::Crop => r#"<path d="M6 2v14a2 2 0 0 0 2 2h14"/><path d="M18 22V8a2 2 0 0 0-2-2H2"/>"#,
            Glyph::Pencil => r#"<path d="M17 3l4 4L8 20H4v-4z"/><path d="M14 6l4 4"/>"#,
            Glyph::Bookmark => r#"<path d="M6 3h12v18l-6-4-6 4z"/>"#,
            Glyph::BookmarkPlus => r#"<path d="M6 3h12v18l-6-4-6 4z"/><path d="M12 7v6M9 10h6"/>"#,
            Glyph::List => r#"<path d="M8 6h13M8 12h13M8 18h13M3 6h.01M3 12h.01M3 18h.01"/>"#,
            Glyph::Cross => r#"<path d="M6 6l12 12M18 6 6 18"/>"#,
            Glyph::Undo => r#"<path d="M9 14 4 9l5-5"/><path d="M4 9h10a6 6 0 0 1 0 12h-3"/>"#,
            Glyph::Download => r#"<path d="M12 3v12M7 10l5 5 5-5M5 21h14"/>"#,
            Glyph::ArrowLeft => r#"<path d="M19 12H5M12 19l-7-7 7-7"/>"#,
            Glyph::Move => {
                r#"<path d="M12 2v20M2 12h20M9 5l3-3 3 3M9 19l3 3 3-3M5 9l-3 3 3 3M19 9l3 3-3 3"/>"#
            }
            Glyph::Line => r#"<path d="M5 19 19 5"/>"#,
            Glyph::Highlighter => {
                r#"<path d="M9 11l-6 6v3h9l3-3"/><path d="M22 12l-4.6 4.6a2 2 0 0 1-2.8 0l-5.2-5.2a2 2 0 0 1 0-2.8L14 4"/>"#
            }
            Glyph::Trash => r#"<path d="M3 6h18M8 6V4h8v2M6 6l1 15h10l1-15"/>"#,
            Glyph::Swap => r#"<path d="M7 16V4M3 8l4-4 4 4M17 8v12M21 16l-4 4-4-4"/>"#,
            Glyph::Check => r#"<path d="M20 6 9 17l-5-5"/>"#,
        }
    }
}

const INFO_BODY: &str = r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4M12 8h.01"/>"#;
const WARNING_BODY: &str = r#"<path d="M10.3 3.9 1.8 18a2 2 0 0 0 1.7 3h17a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0z"/><path d="M12 9v4M12 17h.01"/>"#;

fn render(body: &str, stroke: &str) -> Handle {
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="{stroke}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{body}</svg>"#
    );
    match crate::icon::rasterize_svg(&svg, RASTER_SIZE) {
        Some(pixmap) => Handle::from_rgba(
            RASTER_SIZE,
            RASTER_SIZE,
            crate::icon::straight_rgba(&pixmap),
        ),
        None => {
            log::warn!("Failed to rasterize icon");
            Handle::from_rgba(1, 1, vec![0; 4])
        }
    }
}

fn render_all(stroke: &str) -> Vec<Handle> {
    Glyph::ALL
        .iter()
        .map(|glyph| render(glyph.body(), stroke))
        .collect()
}

fn cached(cache: &'static OnceLock<Vec<Handle>>, stroke: &str, glyph: Glyph) -> Image<Handle> {
    let handles = cache.get_or_init(|| render_all(stroke));
    // ALL lists every variant in declaration order.
    Image::new(handles[glyph as usize].clone())
}

/// Dark strokes for light surfaces.
pub fn dark(glyph: Glyph) -> Image<Handle> {
    static HANDLES: OnceLock<Vec<Handle>> = OnceLock::new();
    cached(&HANDLES, DARK_STROKE, glyph)
}

/// White strokes for dark surfaces.
pub fn light(glyph: Glyph) -> Image<Handle> {
    static HANDLES: OnceLock<Vec<Handle>> = OnceLock::new();
    cached(&HANDLES, LIGHT_STROKE, glyph)
}

/// The variant that contrasts with the theme background.
pub fn for_theme(glyph: Glyph, is_dark: bool) -> Image<Handle> {
    if is_dark {
        light(glyph)
    } else {
        dark(glyph)
    }
}

macro_rules! define_tinted_icon {
    ($name:ident, $body:expr, $color:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Image<Handle> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| render($body, $color));
            Image::new(handle.clone())
        }
    };
}

define_tinted_icon!(success, Glyph::Check.body(), "#43b367", "Green check mark for success toasts.");
define_tinted_icon!(info, INFO_BODY, "#6496ff", "Blue circled i for informational toasts.");
define_tinted_icon!(warning, WARNING_BODY, "#f1a620", "Orange triangle for warning and error toasts.");

/// Creates an icon with specified dimensions.
pub fn sized(icon: Image<Handle>, size: f32) -> Image<Handle> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_order_matches_discriminants() {
        for (index, glyph) in Glyph::ALL.iter().enumerate() {
            assert_eq!(*glyph as usize, index);
        }
    }

    #[test]
    fn every_glyph_rasterizes_with_visible_pixels() {
        for glyph in Glyph::ALL {
            let svg = format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="{DARK_STROKE}" stroke-width="2">{}</svg>"#,
                glyph.body()
            );
            let pixmap = crate::icon::rasterize_svg(&svg, 24).expect("valid glyph");
            assert!(
                pixmap.pixels().iter().any(|p| p.alpha() > 0),
                "{glyph:?} is empty"
            );
        }
    }

    #[test]
    fn all_icons_load_successfully() {
        for glyph in Glyph::ALL {
            let _ = dark(glyph);
            let _ = light(glyph);
        }
        let _ = success();
        let _ = info();
        let _ = warning();
    }
}
