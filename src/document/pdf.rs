// SPDX-License-Identifier: MPL-2.0
//! `mupdf` backed page source.

use super::{PageSource, RenderedPage};
use crate::error::{Error, Result};
use mupdf::{Colorspace, Document, Matrix, Pixmap};
use std::path::{Path, PathBuf};

pub struct PdfDocument {
    doc: Document,
    path: PathBuf,
    page_count: usize,
}

impl std::fmt::Debug for PdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfDocument")
            .field("path", &self.path)
            .field("page_count", &self.page_count)
            .finish_non_exhaustive()
    }
}

impl PdfDocument {
    pub fn open(path: &Path) -> Result<Self> {
        let doc = Document::open(path.to_string_lossy().as_ref())?;
        let page_count = usize::try_from(doc.page_count()?).unwrap_or(0);
        log::info!("Opened {} ({} pages)", path.display(), page_count);
        Ok(Self {
            doc,
            path: path.to_path_buf(),
            page_count,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn check_index(&self, index: usize) -> Result<i32> {
        if index >= self.page_count {
            return Err(Error::PageOutOfRange {
                index,
                count: self.page_count,
            });
        }
        i32::try_from(index).map_err(|_| Error::PageOutOfRange {
            index,
            count: self.page_count,
        })
    }
}

impl PageSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn page_size(&self, index: usize) -> Result<(f32, f32)> {
        let page = self.doc.load_page(self.check_index(index)?)?;
        let bounds = page.bounds()?;
        Ok((bounds.x1 - bounds.x0, bounds.y1 - bounds.y0))
    }

    fn render(&self, index: usize, scale: f32) -> Result<RenderedPage> {
        let page = self.doc.load_page(self.check_index(index)?)?;
        let pixmap = page.to_pixmap(
            &Matrix::new_scale(scale, scale),
            &Colorspace::device_rgb(),
            false,
            false,
        )?;
        let (width, height, rgba) = pixmap_to_rgba(&pixmap)?;
        Ok(RenderedPage::from_rgba(index, width, height, rgba))
    }
}

/// Expands the pixmap rows (gray, RGB or RGBA, honouring the stride) into
/// tightly packed RGBA.
fn pixmap_to_rgba(pixmap: &Pixmap) -> Result<(u32, u32, Vec<u8>)> {
    let n = pixmap.n() as usize;
    let width = pixmap.width() as usize;
    let height = pixmap.height() as usize;
    let stride = pixmap.stride() as usize;
    let samples = pixmap.samples();

    let rgba = pack_rgba(samples, width, height, stride, n)?;
    Ok((width as u32, height as u32, rgba))
}

fn pack_rgba(samples: &[u8], width: usize, height: usize, stride: usize, n: usize) -> Result<Vec<u8>> {
    if !matches!(n, 1 | 3 | 4) {
        return Err(Error::Pdf(format!("Unsupported pixmap format: {n} channels")));
    }
    let row_bytes = width * n;
    if samples.len() < stride.saturating_mul(height) || row_bytes > stride {
        return Err(Error::Pdf("Pixmap buffer size mismatch".to_string()));
    }

    let mut out = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        let row = &samples[y * stride..y * stride + row_bytes];
        match n {
            4 => out.extend_from_slice(row),
            3 => {
                for px in row.chunks_exact(3) {
                    out.extend_from_slice(&[px[0], px[1], px[2], 255]);
                }
            }
            _ => {
                for &gray in row {
                    out.extend_from_slice(&[gray, gray, gray, 255]);
                }
            }
        }
    }
    Ok(out)
}
