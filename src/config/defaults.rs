// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Rendering**: Page rasterization scale and cache size
//! - **Annotation**: Stroke widths for the editor tools
//! - **Capture**: Crop thumb geometry

// ==========================================================================
// Rendering Defaults
// ==========================================================================

/// Default rasterization scale applied to PDF points (1.0 = 72 DPI).
pub const DEFAULT_RENDER_SCALE: f32 = 1.5;

/// Minimum allowed rasterization scale.
pub const MIN_RENDER_SCALE: f32 = 0.5;

/// Maximum allowed rasterization scale.
pub const MAX_RENDER_SCALE: f32 = 4.0;

/// Upper bound of rendered pages kept in memory at once.
pub const MAX_CACHED_PAGES: usize = 5;

// ==========================================================================
// Annotation Defaults
// ==========================================================================

/// Stroke width for the heavy line weight (pixels).
pub const HEAVY_STROKE_WIDTH: f32 = 24.0;

/// Stroke width for the medium line weight (pixels).
pub const MEDIUM_STROKE_WIDTH: f32 = 16.0;

/// Stroke width for the light line weight (pixels).
pub const LIGHT_STROKE_WIDTH: f32 = 8.0;

/// Alpha channel used by highlighter colors (0-255).
pub const HIGHLIGHTER_ALPHA: u8 = 127;

// ==========================================================================
// Capture Defaults
// ==========================================================================

/// Radius of a crop thumb, also used as the half-size of its square hit box.
pub const CROP_THUMB_RADIUS: f32 = 40.0;

/// Alpha channel of the shade painted outside the crop rectangle (0-255).
pub const CROP_SHADE_ALPHA: u8 = 127;

/// JPEG quality used for every exported image.
pub const EXPORT_JPEG_QUALITY: u8 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_RENDER_SCALE > 0.0);
    assert!(MIN_RENDER_SCALE < DEFAULT_RENDER_SCALE);
    assert!(MAX_RENDER_SCALE > DEFAULT_RENDER_SCALE);
    assert!(MAX_CACHED_PAGES > 0);

    assert!(HEAVY_STROKE_WIDTH > MEDIUM_STROKE_WIDTH);
    assert!(MEDIUM_STROKE_WIDTH > LIGHT_STROKE_WIDTH);
    assert!(LIGHT_STROKE_WIDTH > 0.0);

    assert!(CROP_THUMB_RADIUS > 0.0);
    assert!(EXPORT_JPEG_QUALITY <= 100);
};
