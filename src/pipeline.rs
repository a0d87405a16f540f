//! The byte map pipeline: expand globs, filter, scan, accumulate, render, encode.
//!
//! Files are processed strictly one at a time. The first failure aborts the
//! run and nothing is written to the output.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::RunConfig;
use crate::error::{ByteMapError, Result};
use crate::filter::{to_glob_dialect, MATCH_OPTIONS};
use crate::histogram::{scan_path, ByteCount};
use crate::raster::{render, write_png};

/// Outcome of scanning every selected file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Element-wise sum over all scanned files
    pub counts: ByteCount,
    /// Number of files actually scanned (after exclusion)
    pub files_scanned: usize,
}

/// Expand a single inclusion glob into matching paths, in sorted order.
pub fn expand(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob_with(&to_glob_dialect(pattern), MATCH_OPTIONS).map_err(|source| {
        ByteMapError::Pattern {
            pattern: pattern.to_string(),
            source,
        }
    })?;
    let matches = paths.collect::<std::result::Result<Vec<_>, _>>()?;
    log::debug!("Pattern '{}' matched {} path(s)", pattern, matches.len());
    Ok(matches)
}

/// Scan one path, announcing it on `progress` first.
fn scan_announced<P: Write>(path: &Path, progress: &mut P) -> Result<ByteCount> {
    // Best effort: progress lines are not part of the output.
    let _ = writeln!(progress, "reading {}", path.display());
    scan_path(path)
}

/// Scan every file selected by `config` and sum their histograms.
pub fn accumulate<P: Write>(config: &RunConfig, progress: &mut P) -> Result<ScanSummary> {
    let mut summary = ScanSummary::default();

    for pattern in config.patterns() {
        for path in expand(pattern)? {
            if config.exclude().is_excluded(&path) {
                continue;
            }
            summary.counts += scan_announced(&path, progress)?;
            summary.files_scanned += 1;
        }
    }

    log::info!(
        "Scanned {} file(s), {} bytes",
        summary.files_scanned,
        summary.counts.total()
    );
    Ok(summary)
}

/// Run the whole pipeline, writing a PNG to `out` only once every file has
/// been scanned successfully.
pub fn run<W: Write, P: Write>(config: &RunConfig, out: &mut W, progress: &mut P) -> Result<()> {
    let summary = accumulate(config, progress)?;
    let image = render(&summary.counts, config.include_zero(), config.scale())?;
    log::info!("Writing {0}x{0} PNG", config.output_side());
    write_png(&image, out)
}
