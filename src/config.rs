//! Run configuration for bytemap.
//!
//! Built once from parsed arguments and passed by reference to the pipeline.

use crate::error::{ByteMapError, Result};
use crate::filter::{self, ExcludeFilter};
use crate::raster::{scaled_side, GRID_SIZE};

/// Immutable settings for a single run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    patterns: Vec<String>,
    exclude: ExcludeFilter,
    scale: u32,
    include_zero: bool,
}

impl RunConfig {
    /// Validate raw settings.
    ///
    /// Every pattern is compiled here so a malformed one fails before any
    /// file is touched. `scale` must be positive and keep the output side
    /// within `u32`.
    pub fn new(
        patterns: Vec<String>,
        exclude: &[String],
        scale: i64,
        include_zero: bool,
    ) -> Result<Self> {
        for pattern in &patterns {
            filter::compile(pattern)?;
        }
        let exclude = ExcludeFilter::new(exclude)?;

        if scale < 1 {
            return Err(ByteMapError::Config(format!(
                "scale must be at least 1, got {}",
                scale
            )));
        }
        let scale = u32::try_from(scale)
            .map_err(|_| ByteMapError::Config(format!("scale {} is too large", scale)))?;
        scaled_side(GRID_SIZE, scale)?;

        Ok(Self {
            patterns,
            exclude,
            scale,
            include_zero,
        })
    }

    /// Inclusion globs in the order given.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn exclude(&self) -> &ExcludeFilter {
        &self.exclude
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Whether bucket 0 takes part in choosing the normalization reference.
    pub fn include_zero(&self) -> bool {
        self.include_zero
    }

    /// Side length of the image this configuration produces.
    pub fn output_side(&self) -> u32 {
        GRID_SIZE * self.scale
    }
}
