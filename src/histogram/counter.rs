//! Byte counting and histogram accumulation.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::path::Path;

use crate::error::{ByteMapError, Result};

/// Number of distinct byte values.
pub const BUCKETS: usize = 256;

/// Read buffer size used by [`scan`].
const SCAN_BUFFER_SIZE: usize = 8 * 1024;

/// Occurrence count for each of the 256 byte values, indexed by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteCount([u64; BUCKETS]);

impl Default for ByteCount {
    fn default() -> Self {
        Self([0; BUCKETS])
    }
}

impl ByteCount {
    /// An all-zero histogram, the identity for [`ByteCount::merge`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every byte in `data`.
    pub fn record(&mut self, data: &[u8]) {
        for &byte in data {
            self.0[byte as usize] += 1;
        }
    }

    pub fn get(&self, byte: u8) -> u64 {
        self.0[byte as usize]
    }

    /// Total number of bytes counted.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    pub fn as_array(&self) -> &[u64; BUCKETS] {
        &self.0
    }

    /// Element-wise sum of two histograms.
    pub fn merge(&self, other: &ByteCount) -> ByteCount {
        let mut sum = *self;
        sum += *other;
        sum
    }
}

impl From<[u64; BUCKETS]> for ByteCount {
    fn from(counts: [u64; BUCKETS]) -> Self {
        Self(counts)
    }
}

impl AddAssign for ByteCount {
    fn add_assign(&mut self, rhs: ByteCount) {
        for (acc, n) in self.0.iter_mut().zip(rhs.0.iter()) {
            *acc += n;
        }
    }
}

impl Add for ByteCount {
    type Output = ByteCount;

    fn add(mut self, rhs: ByteCount) -> ByteCount {
        self += rhs;
        self
    }
}

impl Sum for ByteCount {
    fn sum<I: Iterator<Item = ByteCount>>(iter: I) -> Self {
        iter.fold(ByteCount::new(), Add::add)
    }
}

/// Read `reader` to exhaustion and count every byte.
///
/// The result does not depend on how the reader splits its data across
/// `read` calls. Interrupted reads are retried; any other error is returned.
pub fn scan<R: Read>(mut reader: R) -> std::io::Result<ByteCount> {
    let mut counts = ByteCount::new();
    let mut buf = [0u8; SCAN_BUFFER_SIZE];

    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => counts.record(&buf[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(counts)
}

/// Open the file at `path`, count its bytes and close it again.
pub fn scan_path(path: &Path) -> Result<ByteCount> {
    let file = File::open(path).map_err(|e| ByteMapError::io(path, e))?;
    let counts = scan(file).map_err(|e| ByteMapError::io(path, e))?;
    log::debug!("{:?}: {} bytes", path, counts.total());
    Ok(counts)
}
