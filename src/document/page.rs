// SPDX-License-Identifier: MPL-2.0
use iced::widget::image;

/// A rasterized page ready for display and export.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub index: usize,
    pub width: u32,
    pub height: u32,
    /// Owns the only copy of the RGBA8 pixels, row-major, no padding.
    pub handle: image::Handle,
}

impl RenderedPage {
    /// Wraps RGBA pixels. `pixels` must hold `width * height * 4` bytes.
    #[must_use]
    pub fn from_rgba(index: usize, width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            index,
            width,
            height,
            handle: image::Handle::from_rgba(width, height, pixels),
        }
    }

    /// Pixels stored in the handle; empty for handles not built from RGBA.
    #[must_use]
    pub fn rgba(&self) -> &[u8] {
        match &self.handle {
            image::Handle::Rgba { pixels, .. } => &pixels[..],
            _ => &[],
        }
    }

    /// Copies the page into an owned `image` buffer for cropping or encoding.
    #[must_use]
    pub fn to_rgba_image(&self) -> Option<image_rs::RgbaImage> {
        image_rs::RgbaImage::from_raw(self.width, self.height, self.rgba().to_vec())
    }

    /// Width divided by height; 1.0 for degenerate pages.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_rgba_image_keeps_dimensions() {
        let page = RenderedPage::from_rgba(0, 3, 2, vec![255; 3 * 2 * 4]);
        let image = page.to_rgba_image().expect("buffer matches size");
        assert_eq!(image.dimensions(), (3, 2));
    }

    #[test]
    fn to_rgba_image_rejects_short_buffer() {
        let page = RenderedPage::from_rgba(0, 3, 2, vec![255; 4]);
        assert!(page.to_rgba_image().is_none());
    }

    #[test]
    fn pixels_are_read_from_the_handle() {
        let pixels: Vec<u8> = (0..16).collect();
        let page = RenderedPage::from_rgba(0, 2, 2, pixels.clone());
        assert_eq!(page.rgba(), pixels.as_slice());
        match &page.handle {
            image::Handle::Rgba { pixels: stored, .. } => {
                assert_eq!(stored.as_ptr(), page.rgba().as_ptr());
            }
            other => panic!("unexpected handle {other:?}"),
        }
    }

    #[test]
    fn clones_share_one_buffer() {
        let page = RenderedPage::from_rgba(0, 2, 2, vec![7; 16]);
        let copy = page.clone();
        assert_eq!(copy.rgba().as_ptr(), page.rgba().as_ptr());
    }

    #[test]
    fn aspect_ratio_of_portrait_page() {
        let page = RenderedPage::from_rgba(0, 100, 200, vec![0; 100 * 200 * 4]);
        assert!((page.aspect_ratio() - 0.5).abs() < f32::EPSILON);
    }
}
