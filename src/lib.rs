//! trackprobe
//!
//! Read-only metadata extraction for MP3 files:
//! path in, [`Mp3Metadata`] out.
//!
//! # What it does
//! - Reads ID3v2 (preferred) and ID3v1 tags, plus stream properties
//! - Fills gaps with deterministic defaults (filename title, "Unknown Artist", "Electronic")
//! - Derives a stable id from the file path
//! - Keeps decoder warnings quiet unless asked for
//!
//! # What it does not do
//! - Write tags
//! - Decode audio for playback
//! - Transcode
//!
//! # Error model
//! [`Mp3Analyzer::analyze_file`] never fails: hard errors (missing file, not an MP3,
//! size lookup failure) come back as a default record plus a message in
//! [`Mp3Analyzer::last_error`]. Use [`Mp3Analyzer::try_analyze`] for a plain `Result`.
//!
//! ```no_run
//! use trackprobe::Mp3Analyzer;
//!
//! let mut analyzer = Mp3Analyzer::new();
//! let meta = analyzer.analyze_file("/music/mixes/sunrise.mp3");
//! if analyzer.last_error().is_empty() {
//!     println!("{} - {} ({}s)", meta.artist, meta.title, meta.duration_seconds);
//! }
//! ```

pub mod core;

pub use crate::core::analyzer::Mp3Analyzer;
pub use crate::core::diagnostics::DiagnosticGate;
pub use crate::core::error::{AnalyzeError, Result};
pub use crate::core::identity::derive_id;
pub use crate::core::library::{MIN_MP3_FILE_SIZE, looks_like_mp3, safe_filename, scan_mp3s};
pub use crate::core::resolve::{current_date_time, file_stem_title};
pub use crate::core::tags::{Id3Decoder, Mp3File, TagDecoder, TagReader};
pub use crate::core::types::{
    AudioProperties, DEFAULT_GENRE, FORMAT_MP3, Mp3Metadata, TagFields, UNKNOWN_ARTIST,
    UNKNOWN_TRACK,
};
pub use crate::core::{analyze_paths, scan_and_analyze_roots, scan_paths};
