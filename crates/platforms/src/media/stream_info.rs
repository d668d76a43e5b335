use crate::media::MediaFormat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single playable audio rendition.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AudioStream {
    // Direct url of the rendition
    pub url: String,
    pub format: MediaFormat,
    // Bitrate in kbps
    pub bitrate_kbps: u32,
}

impl AudioStream {
    pub fn new(url: impl Into<String>, format: MediaFormat, bitrate_kbps: u32) -> Self {
        Self {
            url: url.into(),
            format,
            bitrate_kbps,
        }
    }
}

impl fmt::Display for AudioStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} kbps", self.format, self.bitrate_kbps)
    }
}

/// A video rendition. Audio-only platforms never produce one; the type exists so
/// video queries can answer "not applicable" with a concrete `Option`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VideoStream {
    pub url: String,
    pub resolution: String,
    pub video_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_stream_display() {
        let stream = AudioStream::new("https://cdn.example/a.mp3", MediaFormat::Mp3, 128);
        assert_eq!(stream.to_string(), "mp3 - 128 kbps");
    }
}
