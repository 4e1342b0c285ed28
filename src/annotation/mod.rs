// SPDX-License-Identifier: MPL-2.0
//! Page annotation: drawing tools, the edit stack and flattening.
//!
//! Edits are recorded in display coordinates relative to the pan offset, so
//! the page and its edits move together and can be rasterized at the fit
//! scale without further transformation.

mod annotator;
mod flatten;

pub use annotator::Annotator;
pub use flatten::flatten;

use crate::config::{
    HEAVY_STROKE_WIDTH, HIGHLIGHTER_ALPHA, LIGHT_STROKE_WIDTH, MEDIUM_STROKE_WIDTH,
};
use iced::{Point, Vector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Move,
    Line,
    Pen,
    Highlighter,
}

impl Tool {
    pub const DRAWING: [Tool; 3] = [Tool::Pen, Tool::Line, Tool::Highlighter];

    pub fn i18n_key(self) -> &'static str {
        match self {
            Tool::Move => "editor-tool-move",
            Tool::Line => "editor-tool-line",
            Tool::Pen => "editor-tool-pen",
            Tool::Highlighter => "editor-tool-highlighter",
        }
    }

    /// Colors offered while this tool is active.
    pub fn palette(self) -> &'static [Swatch] {
        match self {
            Tool::Highlighter => &HIGHLIGHTER_PALETTE,
            _ => &PEN_PALETTE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineWeight {
    Heavy,
    Medium,
    #[default]
    Light,
}

impl LineWeight {
    pub const ALL: [LineWeight; 3] = [LineWeight::Heavy, LineWeight::Medium, LineWeight::Light];

    pub fn width(self) -> f32 {
        match self {
            LineWeight::Heavy => HEAVY_STROKE_WIDTH,
            LineWeight::Medium => MEDIUM_STROKE_WIDTH,
            LineWeight::Light => LIGHT_STROKE_WIDTH,
        }
    }

    pub fn i18n_key(self) -> &'static str {
        match self {
            LineWeight::Heavy => "editor-weight-heavy",
            LineWeight::Medium => "editor-weight-medium",
            LineWeight::Light => "editor-weight-light",
        }
    }
}

/// Straight 8-bit RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl From<Rgba> for iced::Color {
    fn from(c: Rgba) -> Self {
        iced::Color::from_rgba8(c.r, c.g, c.b, f32::from(c.a) / 255.0)
    }
}

pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
pub const YELLOW_HIGHLIGHT: Rgba = Rgba::opaque(255, 255, 0).with_alpha(HIGHLIGHTER_ALPHA);

/// A named palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name_key: &'static str,
    pub color: Rgba,
}

const PEN_PALETTE: [Swatch; 5] = [
    Swatch {
        name_key: "color-red",
        color: Rgba::opaque(255, 0, 0),
    },
    Swatch {
        name_key: "color-green",
        color: Rgba::opaque(0, 255, 0),
    },
    Swatch {
        name_key: "color-blue",
        color: Rgba::opaque(0, 0, 255),
    },
    Swatch {
        name_key: "color-white",
        color: Rgba::opaque(255, 255, 255),
    },
    Swatch {
        name_key: "color-black",
        color: BLACK,
    },
];

const HIGHLIGHTER_PALETTE: [Swatch; 3] = [
    Swatch {
        name_key: "color-magenta",
        color: Rgba::opaque(255, 0, 255).with_alpha(HIGHLIGHTER_ALPHA),
    },
    Swatch {
        name_key: "color-cyan",
        color: Rgba::opaque(0, 255, 255).with_alpha(HIGHLIGHTER_ALPHA),
    },
    Swatch {
        name_key: "color-yellow",
        color: YELLOW_HIGHLIGHT,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: BLACK,
            width: LIGHT_STROKE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line { from: Point, to: Point },
    Freehand { points: Vec<Point> },
}

/// One undoable drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Edit {
    pub shape: Shape,
    pub stroke: Stroke,
    /// Pan offset at the time the edit was drawn.
    pub translation: Vector,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_match_stroke_widths() {
        assert_eq!(LineWeight::Heavy.width(), 24.0);
        assert_eq!(LineWeight::Medium.width(), 16.0);
        assert_eq!(LineWeight::Light.width(), 8.0);
    }

    #[test]
    fn highlighter_palette_is_translucent() {
        assert!(Tool::Highlighter
            .palette()
            .iter()
            .all(|s| s.color.a == HIGHLIGHTER_ALPHA));
        assert!(Tool::Pen.palette().iter().all(|s| s.color.a == 255));
        assert_eq!(Tool::Line.palette(), Tool::Pen.palette());
    }

    #[test]
    fn default_stroke_is_thin_black() {
        let stroke = Stroke::default();
        assert_eq!(stroke.color, BLACK);
        assert_eq!(stroke.width, LineWeight::Light.width());
    }

    #[test]
    fn rgba_converts_to_iced_color() {
        let color: iced::Color = YELLOW_HIGHLIGHT.into();
        assert!((color.a - 127.0 / 255.0).abs() < 1e-6);
        assert!((color.r - 1.0).abs() < 1e-6);
        assert!(color.b.abs() < 1e-6);
    }
}
