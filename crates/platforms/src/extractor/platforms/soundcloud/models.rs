use std::fmt;

use serde_json::Value;

use crate::extractor::error::ExtractorError;

/// Availability tier SoundCloud assigns to a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Policy {
    Allow,
    Monetize,
    Block,
    Snip,
    Other(String),
}

impl Policy {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "ALLOW" => Policy::Allow,
            "MONETIZE" => Policy::Monetize,
            "BLOCK" => Policy::Block,
            "SNIP" => Policy::Snip,
            other => Policy::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Policy::Allow => "ALLOW",
            Policy::Monetize => "MONETIZE",
            Policy::Block => "BLOCK",
            Policy::Snip => "SNIP",
            Policy::Other(raw) => raw,
        }
    }

    /// Only fully playable tracks may be extracted.
    pub fn is_extractable(&self) -> bool {
        matches!(self, Policy::Allow | Policy::Monetize)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Track record as returned by the resolve endpoint, kept untyped.
///
/// Fields may be missing, null or of an unexpected type; lookups go through the
/// lenient helpers in `extractor::utils` instead of a fixed schema.
#[derive(Debug, Clone)]
pub struct RawTrack(Value);

impl RawTrack {
    pub fn from_json(body: &str) -> Result<Self, ExtractorError> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, ExtractorError> {
        if value.is_object() {
            Ok(Self(value))
        } else {
            Err(ExtractorError::ParsingError(
                "resolve response is not a JSON object".to_string(),
            ))
        }
    }

    pub fn policy(&self) -> Policy {
        Policy::from_raw(self.0.get("policy").and_then(Value::as_str).unwrap_or(""))
    }

    /// Uploader sub-object; `Value::Null` when missing.
    pub fn user(&self) -> &Value {
        self.0.get("user").unwrap_or(&Value::Null)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
