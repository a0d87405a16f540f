//! Grid layout and nearest-neighbor upscaling.

use image::{GrayImage, Luma};

use crate::error::{ByteMapError, Result};
use crate::histogram::{normalize, ByteCount, NormalizedByteCount};

/// Side length of the base grid, one cell per byte value.
pub const GRID_SIZE: u32 = 16;

/// Lay the 256 normalized values out on a 16x16 grid.
///
/// Byte `i` lands at column `i % 16`, row `i / 16`. Intensity is inverted so
/// frequent bytes render dark and absent bytes render white.
pub fn to_raster(normalized: &NormalizedByteCount) -> GrayImage {
    GrayImage::from_fn(GRID_SIZE, GRID_SIZE, |x, y| {
        let index = (y * GRID_SIZE + x) as usize;
        Luma([255 - normalized.as_array()[index]])
    })
}

/// Output side length for `side` scaled by `factor`, or a config error.
pub fn scaled_side(side: u32, factor: u32) -> Result<u32> {
    if factor == 0 {
        return Err(ByteMapError::Config(
            "scale must be at least 1, got 0".to_string(),
        ));
    }
    side.checked_mul(factor).ok_or_else(|| {
        ByteMapError::Config(format!(
            "scale {} is too large for a {}px image",
            factor, side
        ))
    })
}

/// Replicate each pixel of `grid` into a `factor` x `factor` block.
///
/// Output pixel (x, y) copies source pixel (x / factor, y / factor).
pub fn upscale(grid: &GrayImage, factor: u32) -> Result<GrayImage> {
    let width = scaled_side(grid.width(), factor)?;
    let height = scaled_side(grid.height(), factor)?;
    Ok(GrayImage::from_fn(width, height, |x, y| {
        *grid.get_pixel(x / factor, y / factor)
    }))
}

/// Normalize `counts`, lay them out and upscale by `scale`.
pub fn render(counts: &ByteCount, include_zero: bool, scale: u32) -> Result<GrayImage> {
    let grid = to_raster(&normalize(counts, include_zero));
    upscale(&grid, scale)
}
