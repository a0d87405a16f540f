//! PNG output.

use std::io::Write;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, GrayImage, ImageEncoder, ImageError};

use crate::error::Result;

/// Encode `image` as an 8-bit grayscale PNG into `out` and flush it.
pub fn write_png<W: Write>(image: &GrayImage, out: &mut W) -> Result<()> {
    let (width, height) = image.dimensions();
    PngEncoder::new(&mut *out).write_image(image.as_raw(), width, height, ExtendedColorType::L8)?;
    out.flush().map_err(ImageError::IoError)?;
    Ok(())
}
