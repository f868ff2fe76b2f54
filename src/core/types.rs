//! core/types.rs
//! Plain data types shared by the adapter, the resolver and callers.
//!
//! Rule of thumb:
//! - These structs are "boring bags of data"
//! - No filesystem code
//! - No tag parsing code
//!
//! `Mp3Metadata` represents ONE analyzed audio file plus everything we could
//! learn about it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed format label written by this extractor.
pub const FORMAT_MP3: &str = "MP3";

/// Placeholder used when no tag supplies an artist.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Display fallback for a record without a title.
pub const UNKNOWN_TRACK: &str = "Unknown Track";

/// Placeholder used when no tag supplies a genre.
pub const DEFAULT_GENRE: &str = "Electronic";

/// Metadata record for one file.
///
/// After a successful analysis `title`, `artist` and `genre` are never empty.
/// After a failed one everything except `id` stays at its default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mp3Metadata {
    /// Deterministic id derived from the analyzed path.
    pub id: String,

    pub title: String,
    pub artist: String,
    pub genre: String,
    pub description: String,

    /// Genre read from a tag, as a single-element list. Empty when the genre
    /// is the default placeholder.
    pub tags: Vec<String>,

    pub url: String,

    /// Owned by the caller; the analyzer leaves it empty.
    pub local_path: String,

    pub duration_seconds: u32,
    /// kbit/s
    pub bitrate: u32,
    pub sample_rate: u32,
    pub channels: u32,

    /// On-disk byte count (stat, not tag data).
    pub file_size: u64,
    pub format: String,

    /// `YYYY-MM-DD HH:MM:SS`, local time at analysis.
    pub date_added: String,

    // Populated by the playback/persistence layer, never here.
    pub last_played: String,
    pub play_count: u32,
    pub is_favorite: bool,
}

impl Mp3Metadata {
    pub fn has_valid_id(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn has_valid_title(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn has_valid_local_path(&self) -> bool {
        !self.local_path.is_empty()
    }

    pub fn has_been_played(&self) -> bool {
        self.play_count > 0
    }

    pub fn has_valid_duration(&self) -> bool {
        self.duration_seconds > 0
    }

    /// Title, or "Unknown Track".
    pub fn display_name(&self) -> &str {
        if self.has_valid_title() {
            &self.title
        } else {
            UNKNOWN_TRACK
        }
    }

    /// Artist, or "Unknown Artist".
    pub fn display_artist(&self) -> &str {
        if self.artist.is_empty() {
            UNKNOWN_ARTIST
        } else {
            &self.artist
        }
    }

    /// Has an id, a title and a local path.
    pub fn is_complete(&self) -> bool {
        self.has_valid_id() && self.has_valid_title() && self.has_valid_local_path()
    }
}

/// Stream-level properties. Zero means "unknown".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioProperties {
    pub duration_seconds: u32,
    /// kbit/s
    pub bitrate: u32,
    pub sample_rate: u32,
    pub channels: u32,
}

/// The four text fields the resolver cares about, from one tag block.
///
/// Fields are only ever `Some` with non-empty text: use [`TagFields::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFields {
    title: Option<String>,
    artist: Option<String>,
    genre: Option<String>,
    comment: Option<String>,
}

impl TagFields {
    pub fn new(
        title: Option<&str>,
        artist: Option<&str>,
        genre: Option<&str>,
        comment: Option<&str>,
    ) -> Self {
        Self {
            title: title.and_then(clean_text),
            artist: artist.and_then(clean_text),
            genre: genre.and_then(clean_text),
            comment: comment.and_then(clean_text),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.genre.is_none()
            && self.comment.is_none()
    }
}

/// Strip NUL padding and surrounding whitespace. Empty => absent.
fn clean_text(s: &str) -> Option<String> {
    let s = s.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    if s.is_empty() {
        None
    } else {
        Some(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_fields_treat_blank_as_absent() {
        let fields = TagFields::new(Some(""), Some("  \0\0"), Some("House\0\0\0"), None);
        assert_eq!(fields.title(), None);
        assert_eq!(fields.artist(), None);
        assert_eq!(fields.genre(), Some("House"));
        assert_eq!(fields.comment(), None);
        assert!(!fields.is_empty());
        assert!(TagFields::new(None, Some(" "), None, Some("\0")).is_empty());
    }

    #[test]
    fn default_record_is_blank() {
        let m = Mp3Metadata::default();
        assert!(m.title.is_empty());
        assert!(m.format.is_empty());
        assert_eq!(m.file_size, 0);
        assert!(m.tags.is_empty());
        assert!(!m.is_favorite);
    }

    #[test]
    fn display_helpers_fall_back() {
        let mut m = Mp3Metadata::default();
        assert_eq!(m.display_name(), UNKNOWN_TRACK);
        assert_eq!(m.display_artist(), UNKNOWN_ARTIST);

        m.title = "Sunrise Set".into();
        m.artist = "DJ Nobody".into();
        assert_eq!(m.display_name(), "Sunrise Set");
        assert_eq!(m.display_artist(), "DJ Nobody");
    }

    #[test]
    fn completeness_needs_id_title_and_path() {
        let mut m = Mp3Metadata {
            id: "x".into(),
            title: "t".into(),
            ..Default::default()
        };
        assert!(!m.is_complete());
        m.local_path = "/tmp/t.mp3".into();
        assert!(m.is_complete());

        assert!(!m.has_been_played());
        m.play_count = 3;
        assert!(m.has_been_played());

        assert!(!m.has_valid_duration());
        m.duration_seconds = 1;
        assert!(m.has_valid_duration());
    }
}
