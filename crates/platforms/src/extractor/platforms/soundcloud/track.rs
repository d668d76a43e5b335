use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::{
    extractor::{
        collector::{ItemMapper, ItemsCollector},
        error::ExtractorError,
        platform_extractor::{Downloader, StreamExtractor},
        platforms::soundcloud::{models::RawTrack, utils},
        utils::{
            parse_timestamp_fragment, replace_http_with_https, value_get_i64, value_get_str,
            value_get_u64,
        },
    },
    media::{AgeLimit, AudioStream, MediaFormat, StreamType, VideoStream},
};

const MP3_128_FIELD: &str = "http_mp3_128_url";
const MP3_BITRATE_KBPS: u32 = 128;

/// Bases of the two endpoints queried after resolution.
#[derive(Debug, Clone)]
pub(crate) struct Endpoints {
    pub streams: String,
    pub related: String,
}

/// A resolved, policy-approved SoundCloud track.
///
/// Owns the raw record for its whole lifetime; metadata accessors read it without
/// further requests.
pub struct SoundCloudTrack {
    original_url: String,
    id: String,
    record: RawTrack,
    endpoints: Endpoints,
    downloader: Arc<dyn Downloader>,
}

impl SoundCloudTrack {
    pub(crate) fn new(
        original_url: String,
        id: String,
        record: RawTrack,
        endpoints: Endpoints,
        downloader: Arc<dyn Downloader>,
    ) -> Self {
        Self {
            original_url,
            id,
            record,
            endpoints,
            downloader,
        }
    }

    pub fn record(&self) -> &RawTrack {
        &self.record
    }

    fn track(&self) -> &Value {
        self.record.as_value()
    }

    fn required_str(&self, key: &str) -> Result<&str, ExtractorError> {
        value_get_str(self.track(), key)
            .ok_or_else(|| ExtractorError::ExtractionError(format!("track has no {key}")))
    }

    pub fn streams_api_url(&self, client_id: &str) -> String {
        format!(
            "{}/{}/streams?client_id={}",
            self.endpoints.streams,
            urlencoding::encode(&self.id),
            urlencoding::encode(client_id)
        )
    }

    pub fn related_api_url(&self, client_id: &str) -> String {
        format!(
            "{}/{}/related?client_id={}",
            self.endpoints.related,
            urlencoding::encode(&self.id),
            urlencoding::encode(client_id)
        )
    }
}

#[async_trait]
impl StreamExtractor for SoundCloudTrack {
    fn original_url(&self) -> &str {
        &self.original_url
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn clean_url(&self) -> String {
        value_get_str(self.track(), "permalink_url")
            .map(replace_http_with_https)
            .unwrap_or_else(|| self.original_url.clone())
    }

    fn title(&self) -> Result<String, ExtractorError> {
        self.required_str("title").map(str::to_string)
    }

    fn description(&self) -> Result<String, ExtractorError> {
        // the key is always sent, but null when the uploader left it blank
        match self.track().get("description") {
            Some(Value::Null) => Ok(String::new()),
            _ => self.required_str("description").map(str::to_string),
        }
    }

    fn upload_date(&self) -> Result<String, ExtractorError> {
        utils::to_date_string(self.required_str("created_at")?)
    }

    fn thumbnail_url(&self) -> String {
        value_get_str(self.track(), "artwork_url")
            .unwrap_or_default()
            .to_string()
    }

    fn duration_secs(&self) -> u64 {
        value_get_u64(self.track(), "duration").unwrap_or(0) / 1000
    }

    fn view_count(&self) -> u64 {
        value_get_u64(self.track(), "playback_count").unwrap_or(0)
    }

    fn like_count(&self) -> i64 {
        value_get_i64(self.track(), "favoritings_count").unwrap_or(-1)
    }

    fn dislike_count(&self) -> i64 {
        -1
    }

    fn uploader_name(&self) -> String {
        utils::uploader_name(self.track())
    }

    fn uploader_url(&self) -> String {
        utils::uploader_url(self.track())
    }

    fn uploader_avatar_url(&self) -> String {
        utils::avatar_url(self.track())
    }

    fn age_limit(&self) -> AgeLimit {
        AgeLimit::None
    }

    fn stream_type(&self) -> StreamType {
        StreamType::AudioStream
    }

    fn timestamp_secs(&self) -> Result<Option<u64>, ExtractorError> {
        parse_timestamp_fragment(&self.original_url)
    }

    async fn audio_streams(&self, client_id: &str) -> Result<Vec<AudioStream>, ExtractorError> {
        debug!(id = %self.id, "Fetching SoundCloud streams");
        let body = self
            .downloader
            .download(&self.streams_api_url(client_id))
            .await?;

        let response: Value = serde_json::from_str(&body)?;
        if !response.is_object() {
            return Err(ExtractorError::ParsingError(
                "streams response is not a JSON object".to_string(),
            ));
        }

        match value_get_str(&response, MP3_128_FIELD).filter(|url| !url.is_empty()) {
            Some(url) => Ok(vec![AudioStream::new(
                url,
                MediaFormat::Mp3,
                MP3_BITRATE_KBPS,
            )]),
            None => Err(ExtractorError::NoStreamsFound(self.id.clone())),
        }
    }

    fn video_streams(&self) -> Option<Vec<VideoStream>> {
        None
    }

    fn video_only_streams(&self) -> Option<Vec<VideoStream>> {
        None
    }

    fn dash_mpd_url(&self) -> Option<String> {
        None
    }

    fn hls_url(&self) -> Option<String> {
        None
    }

    async fn related_items(
        &self,
        client_id: &str,
        collector: &mut dyn ItemsCollector,
    ) -> Result<(), ExtractorError> {
        debug!(id = %self.id, "Fetching SoundCloud related tracks");
        collector
            .collect_from_api(self.downloader.as_ref(), &self.related_api_url(client_id))
            .await
    }

    fn related_item_mapper(&self) -> ItemMapper {
        utils::related_item_from_json
    }
}
