//! core/tags/util.rs
//! Small byte-level helpers for locating tag blocks around the audio payload.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const ID3V2_HEADER_LEN: usize = 10;
const ID3V2_FOOTER_LEN: u64 = 10;
const ID3V1_LEN: u64 = 128;

/// Total bytes taken by a leading ID3v2 tag (header + body + footer), or 0.
pub(crate) fn id3v2_tag_len(path: &Path) -> io::Result<u64> {
    let mut header = [0u8; ID3V2_HEADER_LEN];
    let mut file = File::open(path)?;
    if read_full(&mut file, &mut header)? < ID3V2_HEADER_LEN {
        return Ok(0);
    }
    Ok(parse_id3v2_header(&header).unwrap_or(0))
}

/// Parse a 10-byte ID3v2 header into the full tag length.
pub(crate) fn parse_id3v2_header(header: &[u8; ID3V2_HEADER_LEN]) -> Option<u64> {
    if &header[..3] != b"ID3" {
        return None;
    }
    let body = parse_syncsafe(&header[6..10])?;
    let footer = if header[5] & 0x10 != 0 {
        ID3V2_FOOTER_LEN
    } else {
        0
    };
    Some(ID3V2_HEADER_LEN as u64 + body + footer)
}

/// 4 bytes, 7 significant bits each. `None` if a high bit is set.
pub(crate) fn parse_syncsafe(bytes: &[u8]) -> Option<u64> {
    if bytes.len() != 4 {
        return None;
    }

    let mut v: u64 = 0;
    for &b in bytes {
        if b & 0x80 != 0 {
            return None;
        }
        v = (v << 7) | (b as u64);
    }
    Some(v)
}

/// Audio bytes left once both tag blocks are removed.
pub(crate) fn audio_payload_len(file_len: u64, id3v2_len: u64, has_id3v1: bool) -> u64 {
    let v1 = if has_id3v1 { ID3V1_LEN } else { 0 };
    file_len.saturating_sub(id3v2_len).saturating_sub(v1)
}

/// `read` until `buf` is full or EOF. Returns the byte count.
pub(crate) fn read_full(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
