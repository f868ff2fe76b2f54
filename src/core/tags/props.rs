//! core/tags/props.rs
//! Container validity + stream parameters (Symphonia).
//!
//! Only the probe and the track's codec parameters are used. No packets are
//! decoded.

use std::fs::File;
use std::path::Path;

use symphonia::core::codecs::{CODEC_TYPE_MP1, CODEC_TYPE_MP2, CODEC_TYPE_MP3, CodecParameters};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::TimeBase;
use tracing::debug;

use super::super::types::AudioProperties;

/// What the probe learned about the default MPEG audio track.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct StreamInfo {
    pub byte_len: u64,
    pub duration_ms: Option<u64>,
    pub sample_rate: Option<u32>,
    pub channels: Option<u32>,
}

/// `None` if the file is not an MPEG audio stream.
pub(super) fn probe_stream(path: &Path, file: File) -> Option<StreamInfo> {
    let byte_len = file.metadata().map(|m| m.len()).unwrap_or(0);
    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = match symphonia::default::get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    ) {
        Ok(p) => p,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "format probe failed");
            return None;
        }
    };

    let track = probed.format.default_track()?;
    let params = &track.codec_params;

    if ![CODEC_TYPE_MP1, CODEC_TYPE_MP2, CODEC_TYPE_MP3].contains(&params.codec) {
        debug!(path = %path.display(), codec = ?params.codec, "default track is not MPEG audio");
        return None;
    }

    Some(StreamInfo::from_params(byte_len, params))
}

impl StreamInfo {
    fn from_params(byte_len: u64, params: &CodecParameters) -> Self {
        Self {
            byte_len,
            duration_ms: duration_from_params(params.time_base, params.n_frames),
            sample_rate: params.sample_rate,
            channels: params.channels.map(|c| c.count() as u32),
        }
    }

    /// Properties for the record. `payload` is the audio byte count used for
    /// the average bitrate.
    ///
    /// `None` when the stream exposes no sample rate.
    pub fn properties(&self, payload: u64) -> Option<AudioProperties> {
        let sample_rate = self.sample_rate?;
        let duration_ms = self.duration_ms.unwrap_or(0);

        Some(AudioProperties {
            duration_seconds: u32::try_from(duration_ms / 1000).unwrap_or(u32::MAX),
            bitrate: average_kbps(payload, duration_ms),
            sample_rate,
            channels: self.channels.unwrap_or(0),
        })
    }
}

fn duration_from_params(time_base: Option<TimeBase>, n_frames: Option<u64>) -> Option<u64> {
    let tb = time_base?;
    let frames = n_frames?;

    let t = tb.calc_time(frames);
    // Time is { seconds: u64, frac: f64 } in symphonia 0.5.x.
    let ms = (t.seconds as f64 * 1000.0) + (t.frac * 1000.0);
    Some(ms.round() as u64)
}

/// bits per millisecond == kbit/s
fn average_kbps(payload: u64, duration_ms: u64) -> u32 {
    if duration_ms == 0 {
        return 0;
    }
    let kbps = payload.saturating_mul(8) / duration_ms;
    u32::try_from(kbps).unwrap_or(u32::MAX)
}
