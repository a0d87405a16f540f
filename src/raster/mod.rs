//! Raster construction and image output.
//!
//! 1. **Layout** - 256 normalized values onto a 16x16 grid, inverted
//! 2. **Upscaling** - nearest-neighbor block replication by an integer factor
//! 3. **Encoding** - 8-bit grayscale PNG

mod encode;
mod grid;

pub use encode::write_png;
pub use grid::{render, scaled_side, to_raster, upscale, GRID_SIZE};
