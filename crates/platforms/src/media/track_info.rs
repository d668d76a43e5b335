use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StreamType {
    AudioStream,
    VideoStream,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AgeLimit {
    None,
    Years(u8),
}

/// Normalized metadata of a single track.
///
/// Every platform variant produces this shape, whatever its upstream record looks like.
///
/// * `duration_secs` - length in whole seconds
/// * `like_count` - `-1` when the platform did not report it
/// * `dislike_count` - `-1` when the platform does not expose dislikes
/// * `timestamp_secs` - start offset requested by the original url, if any
///
/// # Examples
///
/// ```rust
/// use audio_platforms::media::TrackInfo;
///
/// let json = r#"{
///     "id": "123", "title": "Song", "description": "", "upload_date": "2020-01-02",
///     "duration_secs": 215, "thumbnail_url": "", "view_count": 0, "like_count": -1,
///     "dislike_count": -1, "uploader_name": "", "uploader_url": "",
///     "uploader_avatar_url": "", "age_limit": "none", "stream_type": "audio_stream",
///     "timestamp_secs": null, "clean_url": "https://soundcloud.com/a/song"
/// }"#;
/// let info = TrackInfo::from_json(json).unwrap();
/// assert_eq!(info.duration_secs, 215);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub upload_date: String,
    pub duration_secs: u64,
    pub thumbnail_url: String,
    pub view_count: u64,
    pub like_count: i64,
    pub dislike_count: i64,
    pub uploader_name: String,
    pub uploader_url: String,
    pub uploader_avatar_url: String,
    pub age_limit: AgeLimit,
    pub stream_type: StreamType,
    pub timestamp_secs: Option<u64>,
    pub clean_url: String,
}

impl TrackInfo {
    /// Serialize the TrackInfo to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize the TrackInfo to a pretty-formatted JSON string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a TrackInfo from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
