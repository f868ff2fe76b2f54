//! core/analyzer.rs
//! `Mp3Analyzer`: one extractor instance = one `last_error` + one `verbose` flag.
//!
//! - `try_analyze` is the plain fallible API (`Result`)
//! - `analyze_file` never fails: hard errors land in `last_error` and a
//!   default record (with only `id` set) comes back
//!
//! Instances share nothing. Each call is synchronous and blocking.

use std::fs;
use std::mem;
use std::path::Path;

use tracing::{debug, warn};

use super::diagnostics::DiagnosticGate;
use super::error::{AnalyzeError, Result};
use super::identity::derive_id;
use super::resolve::{self, resolve};
use super::tags::{Id3Decoder, TagDecoder, TagReader};
use super::types::{FORMAT_MP3, Mp3Metadata};

#[derive(Debug, Default)]
pub struct Mp3Analyzer<D = Id3Decoder> {
    decoder: D,
    last_error: String,
    verbose: bool,
}

impl Mp3Analyzer<Id3Decoder> {
    pub fn new() -> Self {
        Self::with_decoder(Id3Decoder)
    }
}

impl<D: TagDecoder> Mp3Analyzer<D> {
    /// Use any decoder that provides the tag capability surface.
    pub fn with_decoder(decoder: D) -> Self {
        Self {
            decoder,
            last_error: String::new(),
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Message from the most recent call that failed. A successful call
    /// leaves it untouched.
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    /// Analyze `path`, recording any hard error in [`last_error`](Self::last_error).
    ///
    /// On error the returned record is default-valued except for `id`.
    pub fn analyze_file(&mut self, path: impl AsRef<Path>) -> Mp3Metadata {
        self.analyze_tracked(path.as_ref()).0
    }

    /// Same as `analyze_file`, plus whether the call hit a hard error.
    pub(crate) fn analyze_tracked(&mut self, path: &Path) -> (Mp3Metadata, bool) {
        let original_error = mem::take(&mut self.last_error);

        let result = {
            let _gate = DiagnosticGate::engage(self.verbose);
            self.try_analyze(path)
        };

        let (metadata, failed) = match result {
            Ok(metadata) => (metadata, false),
            Err(e) => {
                if self.verbose {
                    warn!(path = %path.display(), error = %e, "analysis failed");
                } else {
                    debug!(path = %path.display(), error = %e, "analysis failed");
                }
                self.last_error = e.to_string();
                let metadata = Mp3Metadata {
                    id: derive_id(path),
                    ..Default::default()
                };
                (metadata, true)
            }
        };

        // Nothing new went wrong: keep the previous error around.
        if self.last_error.is_empty() {
            self.last_error = original_error;
        }

        (metadata, failed)
    }

    /// Analyze `path` without touching instance state.
    ///
    /// No diagnostic gate here: decoder warnings pass through as configured.
    pub fn try_analyze(&self, path: impl AsRef<Path>) -> Result<Mp3Metadata> {
        let path = path.as_ref();

        let reader = self.decoder.open(path)?;
        if !reader.is_valid() {
            return Err(AnalyzeError::InvalidContainer(path.to_path_buf()));
        }

        let mut metadata = resolve(path, &reader);

        metadata.id = derive_id(path);
        metadata.file_size = fs::metadata(path)
            .map_err(|source| AnalyzeError::Stat {
                path: path.to_path_buf(),
                source,
            })?
            .len();
        metadata.format = FORMAT_MP3.to_string();
        metadata.date_added = resolve::current_date_time();

        debug!(
            path = %path.display(),
            title = %metadata.title,
            artist = %metadata.artist,
            duration = metadata.duration_seconds,
            "analyzed"
        );

        Ok(metadata)
    }

    /// Deterministic id for `path` (independent of file contents).
    pub fn generate_id(&self, path: impl AsRef<Path>) -> String {
        derive_id(path.as_ref())
    }

    pub fn current_date_time(&self) -> String {
        resolve::current_date_time()
    }
}
