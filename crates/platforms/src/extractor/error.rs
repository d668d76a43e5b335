use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("parsing error: {0}")]
    ParsingError(String),
    #[error("extraction error: {0}")]
    ExtractionError(String),
    #[error("content not available: policy {0:?}")]
    ContentUnavailable(String),
    #[error("unsupported extractor")]
    UnsupportedExtractor,
    #[error("no audio rendition available for track {0}")]
    NoStreamsFound(String),
}

/// Coarse failure category, for callers that only need to branch on the class of error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ContentUnavailable,
    Parsing,
    Extraction,
    Io,
    Other,
}

impl ExtractorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractorError::ContentUnavailable(_) => ErrorKind::ContentUnavailable,
            ExtractorError::JsonError(_) | ExtractorError::ParsingError(_) => ErrorKind::Parsing,
            ExtractorError::ExtractionError(_) | ExtractorError::NoStreamsFound(_) => {
                ErrorKind::Extraction
            }
            ExtractorError::HttpError(_) | ExtractorError::IoError(_) => ErrorKind::Io,
            ExtractorError::InvalidUrl(_) | ExtractorError::UnsupportedExtractor => {
                ErrorKind::Other
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            ExtractorError::ContentUnavailable("BLOCK".into()).kind(),
            ErrorKind::ContentUnavailable
        );
        assert_eq!(
            ExtractorError::ParsingError("bad date".into()).kind(),
            ErrorKind::Parsing
        );
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ExtractorError::from(json_err).kind(), ErrorKind::Parsing);
        assert_eq!(
            ExtractorError::NoStreamsFound("123".into()).kind(),
            ErrorKind::Extraction
        );
        assert_eq!(ExtractorError::InvalidUrl("x".into()).kind(), ErrorKind::Other);
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        assert_eq!(ExtractorError::from(io).kind(), ErrorKind::Io);
        assert_eq!(ExtractorError::UnsupportedExtractor.kind(), ErrorKind::Other);
    }

    #[test]
    fn test_content_unavailable_message_carries_policy() {
        let err = ExtractorError::ContentUnavailable("SNIP".into());
        assert_eq!(err.to_string(), "content not available: policy \"SNIP\"");
    }
}
