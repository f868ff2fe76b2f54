//! core/tags/read.rs
//! Read the two tag generations from an MP3 and reduce them to `TagFields`.
//!
//! - ID3v2 ("modern"): frame-based, at the start of the file
//! - ID3v1 ("legacy"): 128-byte trailer with fixed-width fields
//!
//! Neither reader fails: a block that is missing or unparseable is `None`.

use std::fs::File;
use std::path::Path;

use id3::frame::Content;
use id3::{ErrorKind, Tag, TagLike, v1};
use tracing::debug;

use super::super::types::TagFields;

pub(super) fn read_modern(path: &Path) -> Option<TagFields> {
    let tag = match Tag::read_from_path(path) {
        Ok(tag) => tag,
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => return None,
        Err(e) => match e.partial_tag {
            // Damaged frames after the good ones: keep what parsed.
            Some(tag) => {
                debug!(path = %path.display(), error = %e.description, "using partial ID3v2 tag");
                tag
            }
            None => {
                debug!(path = %path.display(), error = %e.description, "unreadable ID3v2 tag");
                return None;
            }
        },
    };

    Some(fields_from_v2(&tag))
}

fn fields_from_v2(tag: &Tag) -> TagFields {
    let title = tag
        .title()
        .map(str::to_owned)
        .or_else(|| text_frame(tag, "TIT2"));
    let artist = tag
        .artist()
        .map(str::to_owned)
        .or_else(|| text_frame(tag, "TPE1"));
    // "(17)" / "17" style references resolve to names.
    let genre = tag.genre_parsed().map(|g| g.into_owned());
    let comment = first_comment(tag);

    TagFields::new(
        title.as_deref(),
        artist.as_deref(),
        genre.as_deref(),
        comment.as_deref(),
    )
}

pub(super) fn read_legacy(path: &Path) -> Option<TagFields> {
    let file = File::open(path).ok()?;

    match v1::Tag::read_from(file) {
        Ok(tag) => Some(TagFields::new(
            Some(tag.title.as_str()),
            Some(tag.artist.as_str()),
            tag.genre(),
            Some(tag.comment.as_str()),
        )),
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => None,
        Err(e) => {
            debug!(path = %path.display(), error = %e.description, "unreadable ID3v1 tag");
            None
        }
    }
}

/// Best-effort string value for a text frame id.
fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    let frame = tag.get(id)?;
    match frame.content() {
        Content::Text(s) => Some(s.clone()),
        _ => None,
    }
}

/// The comment a player would show: an undescribed COMM frame if there is
/// one, otherwise the first comment with any text.
fn first_comment(tag: &Tag) -> Option<String> {
    let mut fallback: Option<&str> = None;

    for frame in tag.frames() {
        if frame.id() != "COMM" {
            continue;
        }
        if let Content::Comment(c) = frame.content() {
            if c.text.trim().is_empty() {
                continue;
            }
            if c.description.is_empty() {
                return Some(c.text.clone());
            }
            fallback.get_or_insert(c.text.as_str());
        }
    }

    fallback.map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use id3::frame::Comment;

    fn comment(description: &str, text: &str) -> Comment {
        Comment {
            lang: "eng".to_string(),
            description: description.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn v2_fields_are_extracted() {
        let mut tag = Tag::new();
        tag.set_title("Warehouse Session");
        tag.set_artist("Some DJ");
        tag.set_genre("Techno");
        let _ = tag.add_frame(comment("", "Recorded live"));

        let fields = fields_from_v2(&tag);
        assert_eq!(fields.title(), Some("Warehouse Session"));
        assert_eq!(fields.artist(), Some("Some DJ"));
        assert_eq!(fields.genre(), Some("Techno"));
        assert_eq!(fields.comment(), Some("Recorded live"));
    }

    #[test]
    fn numeric_genre_reference_is_resolved() {
        let mut tag = Tag::new();
        tag.set_genre("(18)");
        assert_eq!(fields_from_v2(&tag).genre(), Some("Techno"));
    }

    #[test]
    fn undescribed_comment_wins() {
        let mut tag = Tag::new();
        let _ = tag.add_frame(comment("iTunNORM", "0000 0000"));
        let _ = tag.add_frame(comment("", "the real one"));
        assert_eq!(first_comment(&tag).as_deref(), Some("the real one"));
    }

    #[test]
    fn described_comment_is_a_fallback() {
        let mut tag = Tag::new();
        let _ = tag.add_frame(comment("notes", "only this"));
        assert_eq!(first_comment(&tag).as_deref(), Some("only this"));
    }

    #[test]
    fn empty_v2_tag_yields_empty_fields() {
        assert!(fields_from_v2(&Tag::new()).is_empty());
    }
}
