use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaFormat {
    Mp3,
}

impl MediaFormat {
    pub fn as_str(&self) -> &str {
        match self {
            MediaFormat::Mp3 => "mp3",
        }
    }

    pub fn mime_type(&self) -> &str {
        match self {
            MediaFormat::Mp3 => "audio/mpeg",
        }
    }

    pub fn from_str(format: &str) -> Option<Self> {
        match format.to_lowercase().as_str() {
            "mp3" => Some(MediaFormat::Mp3),
            _ => None,
        }
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(MediaFormat::from_str("MP3"), Some(MediaFormat::Mp3));
        assert_eq!(MediaFormat::from_str("flv"), None);
        assert_eq!(MediaFormat::Mp3.mime_type(), "audio/mpeg");
    }
}
