//! core/mod.rs
//!
//! The extraction pipeline:
//!   (A) discover paths -> Vec<PathBuf>
//!   (B) analyze each path -> Vec<Mp3Metadata>
//!
//! Per-file analysis lives in [`analyzer`]; (A) and (B) here are thin batch
//! wrappers for callers that manage a whole folder of mixes.

pub mod analyzer;
pub mod diagnostics;
pub mod error;
pub mod identity;
pub mod library;
pub mod resolve;
pub mod tags;
pub mod types;

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::debug;

use analyzer::Mp3Analyzer;
use error::Result;
use tags::TagDecoder;
use types::Mp3Metadata;

/// Discover MP3 files under multiple roots.
///
/// - De-dupes across overlapping roots by full path
/// - Sorts paths once
pub fn scan_paths(roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut seen: HashSet<PathBuf> = HashSet::with_capacity(1024);
    let mut out: Vec<PathBuf> = Vec::new();

    for root in roots {
        let paths = library::scan_mp3s(root)?;
        for path in paths {
            if seen.insert(path.clone()) {
                out.push(path);
            }
        }
    }

    out.sort();
    Ok(out)
}

/// Analyze already-discovered paths.
///
/// - Never fails hard per-file: a failed file yields its default record
/// - Sets `local_path` on every record
/// - Returns (records, failures)
pub fn analyze_paths<D: TagDecoder>(
    analyzer: &mut Mp3Analyzer<D>,
    paths: Vec<PathBuf>,
) -> (Vec<Mp3Metadata>, usize) {
    let mut records: Vec<Mp3Metadata> = Vec::with_capacity(paths.len());
    let mut failures: usize = 0;

    for path in paths {
        let (mut record, failed) = analyzer.analyze_tracked(&path);
        if failed {
            debug!(path = %path.display(), "analysis failed, keeping default record");
            failures += 1;
        }
        record.local_path = path.to_string_lossy().into_owned();
        records.push(record);
    }

    (records, failures)
}

/// Convenience: scan + analyze in one go.
pub fn scan_and_analyze_roots<D: TagDecoder>(
    analyzer: &mut Mp3Analyzer<D>,
    roots: &[PathBuf],
) -> Result<(Vec<Mp3Metadata>, usize)> {
    let paths = scan_paths(roots)?;
    Ok(analyze_paths(analyzer, paths))
}
