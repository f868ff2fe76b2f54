//! Fixture builders: small but real MP3 files.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use id3::frame::Comment;
use id3::{Tag, TagLike, Version};

/// MPEG-1 Layer III, 128 kbit/s, 44.1 kHz, stereo, no CRC, no padding.
const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x00];
/// floor(144 * 128000 / 44100)
pub const FRAME_LEN: usize = 417;
/// Header (4) + MPEG-1 stereo side info (32).
const INFO_TAG_OFFSET: usize = 36;

/// `audio_frames` silent frames preceded by a Xing "Info" frame that
/// announces the frame count.
pub fn mpeg_stream(audio_frames: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(FRAME_LEN * (audio_frames as usize + 1));

    let mut info = blank_frame();
    info[INFO_TAG_OFFSET..INFO_TAG_OFFSET + 4].copy_from_slice(b"Info");
    // flags: frame count present
    info[INFO_TAG_OFFSET + 4..INFO_TAG_OFFSET + 8].copy_from_slice(&1u32.to_be_bytes());
    info[INFO_TAG_OFFSET + 8..INFO_TAG_OFFSET + 12].copy_from_slice(&audio_frames.to_be_bytes());
    out.extend_from_slice(&info);

    for _ in 0..audio_frames {
        out.extend_from_slice(&blank_frame());
    }
    out
}

fn blank_frame() -> Vec<u8> {
    let mut frame = vec![0u8; FRAME_LEN];
    frame[..4].copy_from_slice(&FRAME_HEADER);
    frame
}

/// Serialized ID3v2.4 tag.
pub fn id3v2(title: Option<&str>, artist: Option<&str>, genre: Option<&str>, comment: Option<&str>) -> Vec<u8> {
    let mut tag = Tag::new();
    if let Some(t) = title {
        tag.set_title(t);
    }
    if let Some(a) = artist {
        tag.set_artist(a);
    }
    if let Some(g) = genre {
        tag.set_genre(g);
    }
    if let Some(c) = comment {
        let _ = tag.add_frame(Comment {
            lang: "eng".to_string(),
            description: String::new(),
            text: c.to_string(),
        });
    }

    let mut buf = Vec::new();
    tag.write_to(&mut buf, Version::Id3v24).unwrap();
    buf
}

/// ID3v2.4 tag with a good TIT2 frame followed by a frame `id3` refuses
/// (grouping identity flag set). Readers that skip unknown frames accept it.
pub fn id3v2_damaged(title: &str) -> Vec<u8> {
    let mut frames = Vec::new();

    let mut body = vec![0x03]; // UTF-8
    body.extend_from_slice(title.as_bytes());
    frames.extend_from_slice(b"TIT2");
    frames.extend_from_slice(&syncsafe(body.len() as u32));
    frames.extend_from_slice(&[0x00, 0x00]);
    frames.extend_from_slice(&body);

    frames.extend_from_slice(b"XBAD");
    frames.extend_from_slice(&syncsafe(4));
    frames.extend_from_slice(&[0x00, 0x40]);
    frames.extend_from_slice(b"oops");

    let mut out = b"ID3\x04\x00\x00".to_vec();
    out.extend_from_slice(&syncsafe(frames.len() as u32));
    out.extend_from_slice(&frames);
    out
}

fn syncsafe(n: u32) -> [u8; 4] {
    [
        ((n >> 21) & 0x7f) as u8,
        ((n >> 14) & 0x7f) as u8,
        ((n >> 7) & 0x7f) as u8,
        (n & 0x7f) as u8,
    ]
}

/// 128-byte ID3v1.1 trailer.
pub fn id3v1(title: &str, artist: &str, comment: &str, genre_id: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(128);
    out.extend_from_slice(b"TAG");
    out.extend_from_slice(&fixed(title, 30));
    out.extend_from_slice(&fixed(artist, 30));
    out.extend_from_slice(&fixed("", 30)); // album
    out.extend_from_slice(&fixed("2024", 4));
    out.extend_from_slice(&fixed(comment, 28));
    out.extend_from_slice(&[0, 1]); // v1.1 track marker + track 1
    out.push(genre_id);
    assert_eq!(out.len(), 128);
    out
}

fn fixed(s: &str, len: usize) -> Vec<u8> {
    let mut v: Vec<u8> = s.bytes().take(len).collect();
    v.resize(len, 0);
    v
}

pub struct Mp3Builder {
    v2: Option<Vec<u8>>,
    v1: Option<Vec<u8>>,
    frames: u32,
}

impl Mp3Builder {
    pub fn new() -> Self {
        Self {
            v2: None,
            v1: None,
            frames: 100,
        }
    }

    pub fn v2(mut self, title: Option<&str>, artist: Option<&str>, genre: Option<&str>, comment: Option<&str>) -> Self {
        self.v2 = Some(id3v2(title, artist, genre, comment));
        self
    }

    pub fn raw_v2(mut self, tag: Vec<u8>) -> Self {
        self.v2 = Some(tag);
        self
    }

    pub fn v1(mut self, title: &str, artist: &str, comment: &str, genre_id: u8) -> Self {
        self.v1 = Some(id3v1(title, artist, comment, genre_id));
        self
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        if let Some(v2) = &self.v2 {
            out.extend_from_slice(v2);
        }
        out.extend_from_slice(&mpeg_stream(self.frames));
        if let Some(v1) = &self.v1 {
            out.extend_from_slice(v1);
        }
        out
    }

    pub fn write(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, self.bytes()).unwrap();
        path
    }
}

/// Text that is long enough to pass a size check but is not audio.
pub fn write_mock(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut body = content.to_string();
    while body.len() < 1024 {
        body.push_str(content);
    }
    fs::write(&path, body).unwrap();
    path
}
