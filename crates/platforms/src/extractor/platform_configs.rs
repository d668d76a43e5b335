//! Platform-specific configuration types and utilities.
//!
//! Extractors receive their options as an untyped `extras` JSON value; each platform
//! reads it into a typed config here. Layers (config file, command line) are combined
//! with [`merge_platform_extras`] before they reach the extractor.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extractor::utils::extras_get_str;

/// SoundCloud platform-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SoundCloudConfig {
    /// Resolve endpoint (default: "https://api.soundcloud.com/resolve")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_url: Option<String>,
    /// Base of the streams endpoint (default: "https://api.soundcloud.com/i1/tracks")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streams_api_url: Option<String>,
    /// Base of the related endpoint (default: "https://api-v2.soundcloud.com/tracks")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_api_url: Option<String>,
}

impl SoundCloudConfig {
    pub fn from_extras(extras: Option<&Value>) -> Self {
        let get = |key: &str| {
            extras_get_str(extras, key).map(|s| s.trim_end_matches('/').to_string())
        };
        Self {
            resolve_url: get("resolve_url"),
            streams_api_url: get("streams_api_url"),
            related_api_url: get("related_api_url"),
        }
    }
}

/// Merge two JSON objects, with overlay taking precedence.
///
/// This function performs a shallow merge of JSON objects. For nested objects,
/// the overlay completely replaces the base value (no deep merge).
///
/// # Example
/// ```
/// use serde_json::json;
/// use audio_platforms::extractor::platform_configs::merge_platform_extras;
///
/// let base = Some(json!({"resolve_url": "https://a", "related_api_url": "https://b"}));
/// let overlay = Some(json!({"related_api_url": "https://c"}));
/// let merged = merge_platform_extras(base, overlay);
/// assert_eq!(merged, Some(json!({"resolve_url": "https://a", "related_api_url": "https://c"})));
/// ```
pub fn merge_platform_extras(base: Option<Value>, overlay: Option<Value>) -> Option<Value> {
    match (base, overlay) {
        (None, None) => None,
        (Some(b), None) => Some(b),
        (None, Some(o)) => Some(o),
        (Some(Value::Object(mut base_map)), Some(Value::Object(overlay_map))) => {
            for (k, v) in overlay_map {
                // Skip null values - they don't override
                if !v.is_null() {
                    base_map.insert(k, v);
                }
            }
            Some(Value::Object(base_map))
        }
        // If either is not an object, overlay wins
        (_, Some(o)) => Some(o),
    }
}
