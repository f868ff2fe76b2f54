//! core/library.rs
//! Filesystem helpers around analysis: find MP3s, sniff them cheaply, and turn
//! titles into file names.

use std::fs::File;
use std::path::{Path, PathBuf};

use super::error::{AnalyzeError, Result};
use super::tags::read_full;

/// Smallest file `looks_like_mp3` will accept.
pub const MIN_MP3_FILE_SIZE: u64 = 1024;

const MAX_FILENAME_LEN: usize = 200;
const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Recursively collect `.mp3` files under `root` (unsorted).
pub fn scan_mp3s(root: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    walk_dir(root, &mut out)?;
    Ok(out)
}

fn walk_dir(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let scan_err = |source| AnalyzeError::Scan {
        path: dir.to_path_buf(),
        source,
    };

    for entry in std::fs::read_dir(dir).map_err(scan_err)? {
        let path = entry.map_err(scan_err)?.path();

        if path.is_dir() {
            walk_dir(&path, out)?;
        } else if is_mp3(&path) {
            out.push(path);
        }
    }

    Ok(())
}

/// Extension check only (case-insensitive).
pub fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}

/// Quick check without decoding:
/// - regular file with an `.mp3` extension
/// - at least [`MIN_MP3_FILE_SIZE`] bytes
/// - starts with an ID3v2 header or an MPEG frame sync
pub fn looks_like_mp3(path: &Path) -> bool {
    if !path.is_file() || !is_mp3(path) {
        return false;
    }

    match std::fs::metadata(path) {
        Ok(meta) if meta.len() >= MIN_MP3_FILE_SIZE => {}
        _ => return false,
    }

    let Ok(mut file) = File::open(path) else {
        return false;
    };
    let mut head = [0u8; 3];
    match read_full(&mut file, &mut head) {
        Ok(n) if n == head.len() => starts_like_mp3(&head),
        _ => false,
    }
}

fn starts_like_mp3(head: &[u8]) -> bool {
    match head {
        [b'I', b'D', b'3', ..] => true,
        [0xFF, second, ..] => second & 0xE0 == 0xE0,
        _ => false,
    }
}

/// Turn a track title into something usable as a file name.
///
/// - `< > : " / \ | ? *` become `_`
/// - leading/trailing spaces and dots are trimmed, then trailing `_`
/// - capped at 200 characters
pub fn safe_filename(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| if INVALID_FILENAME_CHARS.contains(&c) { '_' } else { c })
        .collect();

    let trimmed = replaced
        .trim_matches(|c: char| c == ' ' || c == '.')
        .trim_end_matches('_');

    trimmed.chars().take(MAX_FILENAME_LEN).collect()
}
