//! Min-max normalization of byte counts into the 0-255 display range.

use super::counter::{ByteCount, BUCKETS};

/// Byte counts rescaled to 0-255, indexed by byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedByteCount([u8; BUCKETS]);

impl Default for NormalizedByteCount {
    fn default() -> Self {
        Self([0; BUCKETS])
    }
}

impl NormalizedByteCount {
    pub fn get(&self, byte: u8) -> u8 {
        self.0[byte as usize]
    }

    pub fn as_array(&self) -> &[u8; BUCKETS] {
        &self.0
    }
}

/// The largest count eligible to act as the scale reference.
///
/// Bucket 0 only takes part when `include_zero` is set.
pub fn reference_max(counts: &ByteCount, include_zero: bool) -> u64 {
    let skip = if include_zero { 0 } else { 1 };
    counts.as_array()[skip..].iter().copied().max().unwrap_or(0)
}

/// Rescale `counts` so the reference maximum maps to 255.
///
/// Every bucket, including bucket 0, is scaled against the reference from
/// [`reference_max`]. A zero reference yields an all-zero result. Bucket 0
/// can exceed the reference when it is left out of the maximum; it is
/// clamped to 255 in that case.
pub fn normalize(counts: &ByteCount, include_zero: bool) -> NormalizedByteCount {
    let max = reference_max(counts, include_zero);
    log::debug!(
        "Normalizing against max count {} (include_zero={})",
        max,
        include_zero
    );

    let mut normalized = NormalizedByteCount::default();
    if max == 0 {
        return normalized;
    }

    for (out, &count) in normalized.0.iter_mut().zip(counts.as_array().iter()) {
        let scaled = count as u128 * 255 / max as u128;
        *out = scaled.min(255) as u8;
    }

    normalized
}
