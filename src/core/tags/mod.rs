//! core/tags/mod.rs
//!
//! Tag reader adapter.
//! Public API:
//! - [`TagDecoder`] opens a path and hands back a [`TagReader`].
//! - [`TagReader`] is the narrow capability surface the resolver depends on.
//! - [`Id3Decoder`] / [`Mp3File`] implement it with `id3` + `symphonia`.
//!
//! Anything that satisfies the two traits (a test double, another decoder)
//! can be dropped into `Mp3Analyzer` without touching the resolver.

mod props;
mod read;
mod util;

use std::fs::{self, File};
use std::io;
use std::path::Path;

use tracing::debug;

use super::error::{AnalyzeError, Result};
use super::types::{AudioProperties, TagFields};

pub(crate) use util::read_full;

/// What the resolver may ask of an opened file.
pub trait TagReader {
    /// Recognized as a decodable container (says nothing about tags).
    fn is_valid(&self) -> bool;

    /// Extensible, frame-based tag block (ID3v2), if present.
    fn modern_tag(&self) -> Option<&TagFields>;

    /// Fixed-field trailer tag block (ID3v1), if present.
    fn legacy_tag(&self) -> Option<&TagFields>;

    fn audio_properties(&self) -> Option<AudioProperties>;
}

/// Opens files for a [`TagReader`].
///
/// Errors are reserved for paths that cannot be read at all; an unrecognized
/// file opens fine and reports `is_valid() == false`.
pub trait TagDecoder {
    type Reader: TagReader;

    fn open(&self, path: &Path) -> Result<Self::Reader>;
}

/// Production decoder: ID3v2 + ID3v1 via `id3`, stream probe via `symphonia`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Id3Decoder;

impl TagDecoder for Id3Decoder {
    type Reader = Mp3File;

    fn open(&self, path: &Path) -> Result<Mp3File> {
        let unreadable = |source| AnalyzeError::Unreadable {
            path: path.to_path_buf(),
            source,
        };

        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => {}
            // Directories and other non-files count as absent.
            Ok(_) => return Err(AnalyzeError::NotFound(path.to_path_buf())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(AnalyzeError::NotFound(path.to_path_buf()));
            }
            Err(e) => return Err(unreadable(e)),
        }

        let file = File::open(path).map_err(unreadable)?;

        Ok(Mp3File::read(path, file))
    }
}

/// Everything read from one MP3, gathered eagerly at open time.
#[derive(Debug, Clone, Default)]
pub struct Mp3File {
    valid: bool,
    modern: Option<TagFields>,
    legacy: Option<TagFields>,
    properties: Option<AudioProperties>,
}

impl Mp3File {
    fn read(path: &Path, file: File) -> Self {
        // Stream probe first: nothing else is read from an invalid container.
        let Some(stream) = props::probe_stream(path, file) else {
            debug!(path = %path.display(), "not an MPEG audio stream");
            return Self::default();
        };

        let modern = read::read_modern(path);
        let legacy = read::read_legacy(path);

        let payload = util::audio_payload_len(
            stream.byte_len,
            util::id3v2_tag_len(path).unwrap_or(0),
            legacy.is_some(),
        );

        Self {
            valid: true,
            modern,
            legacy,
            properties: stream.properties(payload),
        }
    }
}

impl TagReader for Mp3File {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn modern_tag(&self) -> Option<&TagFields> {
        self.modern.as_ref()
    }

    fn legacy_tag(&self) -> Option<&TagFields> {
        self.legacy.as_ref()
    }

    fn audio_properties(&self) -> Option<AudioProperties> {
        self.properties
    }
}
