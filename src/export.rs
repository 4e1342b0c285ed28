// SPDX-License-Identifier: MPL-2.0
//! Saving annotated pages and captures as JPEG images.

use crate::config::EXPORT_JPEG_QUALITY;
use crate::error::{Error, Result};
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::{DynamicImage, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub const EXTENSION: &str = "jpg";

/// Checks a name typed into the save prompt and returns the target path.
///
/// The name must not be blank, must be a plain file name and must not
/// collide with an existing image in `dir`.
pub fn validate_file_name(input: &str, dir: &Path) -> Result<PathBuf> {
    let name = input.trim();
    if name.is_empty()
        || name.contains(['/', '\\'])
        || name == "."
        || name == ".."
    {
        return Err(Error::InvalidFileName);
    }

    let path = dir.join(format!("{name}.{EXTENSION}"));
    if path.exists() {
        return Err(Error::InvalidFileName);
    }
    Ok(path)
}

/// Writes `image` as a maximum quality JPEG, dropping the alpha channel.
pub fn save_jpeg(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
    let writer = BufWriter::new(File::create(path)?);
    let mut encoder = JpegEncoder::new_with_quality(writer, EXPORT_JPEG_QUALITY);
    encoder.encode_image(&rgb)?;
    log::info!("Saved {}x{} image to {}", rgb.width(), rgb.height(), path.display());
    Ok(())
}
