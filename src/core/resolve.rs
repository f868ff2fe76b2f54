//! core/resolve.rs
//! Fallback chain: adapter results -> `Mp3Metadata`.
//!
//! Per field, first value wins:
//! 1. modern tag (ID3v2)
//! 2. legacy tag (ID3v1), for title/artist/genre ONLY when the modern tag gave
//!    neither a title nor an artist (one gate for all three fields)
//! 3. defaults: filename stem / "Unknown Artist" / "Electronic"
//!
//! `tags` carries the tag-sourced genre only, so an untagged file has none.
//!
//! Identity, file size and format are filled in by the analyzer, not here.

use std::path::Path;

use tracing::debug;

use super::tags::TagReader;
use super::types::{DEFAULT_GENRE, Mp3Metadata, TagFields, UNKNOWN_ARTIST};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn resolve(path: &Path, reader: &impl TagReader) -> Mp3Metadata {
    let modern = reader.modern_tag();
    let legacy = reader.legacy_tag();

    let mut title = modern.and_then(TagFields::title).map(str::to_owned);
    let mut artist = modern.and_then(TagFields::artist).map(str::to_owned);
    let mut genre = modern.and_then(TagFields::genre).map(str::to_owned);

    // Joint gate: the legacy block only fills in when the modern one named
    // neither title nor artist. Genre follows the same gate, even if the
    // modern block had no genre of its own.
    if title.is_none() && artist.is_none() {
        if let Some(v1) = legacy {
            debug!(path = %path.display(), "falling back to ID3v1 for title/artist/genre");
            title = v1.title().map(str::to_owned);
            artist = v1.artist().map(str::to_owned);
            genre = genre.or_else(|| v1.genre().map(str::to_owned));
        }
    }

    // Only a genre read from a tag is listed; the placeholder is not.
    let tags: Vec<String> = genre.iter().cloned().collect();

    let title = title.unwrap_or_else(|| file_stem_title(path));
    let artist = artist.unwrap_or_else(|| UNKNOWN_ARTIST.to_string());
    let genre = genre.unwrap_or_else(|| DEFAULT_GENRE.to_string());

    let description = modern
        .and_then(TagFields::comment)
        .or_else(|| legacy.and_then(TagFields::comment))
        .map_or_else(|| title.clone(), str::to_owned);

    let props = reader.audio_properties().unwrap_or_default();

    Mp3Metadata {
        title,
        artist,
        genre,
        description,
        tags,
        duration_seconds: props.duration_seconds,
        bitrate: props.bitrate,
        sample_rate: props.sample_rate,
        channels: props.channels,
        ..Default::default()
    }
}

/// File name without directory or final extension.
pub fn file_stem_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Local wall-clock time as `YYYY-MM-DD HH:MM:SS`.
pub fn current_date_time() -> String {
    chrono::Local::now().format(DATETIME_FORMAT).to_string()
}
