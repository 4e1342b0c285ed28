// SPDX-License-Identifier: MPL-2.0
//! Document access: page rasterization and the bounded page cache.
//!
//! [`PageSource`] abstracts the rendering backend so the cache can be tested
//! with an in-memory fake; [`PdfDocument`] is the `mupdf` implementation used
//! by the application.

mod page;
mod page_loader;
mod pdf;

pub use page::RenderedPage;
pub use page_loader::PageLoader;
pub use pdf::PdfDocument;

use crate::error::Result;

/// Something that can report page geometry and rasterize pages.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Page size in points (width, height), unscaled.
    fn page_size(&self, index: usize) -> Result<(f32, f32)>;

    /// Rasterizes a page at `scale` pixels per point.
    fn render(&self, index: usize, scale: f32) -> Result<RenderedPage>;
}
