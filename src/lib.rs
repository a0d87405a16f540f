//! bytemap library crate.
//!
//! Builds a byte-value frequency histogram over a set of files and renders it
//! as a 16x16 grayscale fingerprint image.

pub mod config;
pub mod error;
pub mod filter;
pub mod histogram;
pub mod pipeline;
pub mod raster;

pub use config::RunConfig;
pub use error::{ByteMapError, Result};
