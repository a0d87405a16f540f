//! Byte histogram construction.
//!
//! 1. **Counting** - stream a reader and tally each byte value
//! 2. **Accumulation** - element-wise sum of per-file histograms
//! 3. **Normalization** - rescale counts into the 0-255 intensity range

mod counter;
mod normalizer;

pub use counter::{scan, scan_path, ByteCount, BUCKETS};
pub use normalizer::{normalize, reference_max, NormalizedByteCount};
