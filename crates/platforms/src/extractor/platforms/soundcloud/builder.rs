use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use std::sync::{Arc, LazyLock};
use tracing::{debug, warn};

use crate::extractor::{
    collector::StreamItemsCollector,
    error::ExtractorError,
    platform_configs::SoundCloudConfig,
    platform_extractor::{Downloader, Extractor, PlatformExtractor, StreamExtractor},
    platforms::soundcloud::{
        models::RawTrack,
        track::{Endpoints, SoundCloudTrack},
        utils::related_item_from_json,
    },
    utils::value_get_i64,
};

pub static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.|m\.)?soundcloud\.com/([\w-]+)/([\w-]+)").unwrap()
});

// First path segments that are site sections, not uploaders.
const RESERVED_USER_SEGMENTS: &[&str] = &["discover", "search", "stream", "charts", "you"];
// Second path segments that are profile tabs or collections, not tracks.
const RESERVED_TRACK_SEGMENTS: &[&str] = &[
    "sets",
    "likes",
    "tracks",
    "albums",
    "reposts",
    "popular-tracks",
    "followers",
    "following",
    "comments",
    "spotlight",
];

/// Whether `url` points at a single track rather than a profile tab or playlist.
pub fn is_track_url(url: &str) -> bool {
    URL_REGEX.captures(url).is_some_and(|caps| {
        let user = caps.get(1).map_or("", |m| m.as_str());
        let track = caps.get(2).map_or("", |m| m.as_str());
        !RESERVED_USER_SEGMENTS.contains(&user) && !RESERVED_TRACK_SEGMENTS.contains(&track)
    })
}

pub const PLATFORM_ID: &str = "soundcloud";

const RESOLVE_URL: &str = "https://api.soundcloud.com/resolve";
const STREAMS_API_URL: &str = "https://api.soundcloud.com/i1/tracks";
const RELATED_API_URL: &str = "https://api-v2.soundcloud.com/tracks";

pub struct SoundCloud {
    pub extractor: Extractor,
    config: SoundCloudConfig,
    downloader: Arc<dyn Downloader>,
}

impl SoundCloud {
    const BASE_URL: &str = "https://soundcloud.com";

    /// `client` needs a TLS provider of its own (see [`default_client`]); the
    /// workspace builds reqwest without a process-wide rustls provider.
    ///
    /// [`default_client`]: crate::extractor::default::default_client
    pub fn new(url: String, client: Client, extras: Option<serde_json::Value>) -> Self {
        let mut extractor = Extractor::new("SoundCloud", url, client);
        extractor.add_header_str(reqwest::header::ORIGIN.as_str(), Self::BASE_URL);
        extractor.add_header_str(reqwest::header::REFERER.as_str(), Self::BASE_URL);

        let config = SoundCloudConfig::from_extras(extras.as_ref());
        let downloader = Arc::new(extractor.clone());
        Self {
            extractor,
            config,
            downloader,
        }
    }

    /// Replaces the HTTP transport, e.g. with one that adds retries.
    pub fn with_downloader(mut self, downloader: Arc<dyn Downloader>) -> Self {
        self.downloader = downloader;
        self
    }

    /// Collector that understands entries of SoundCloud's related endpoint, for callers
    /// holding the concrete type. Behind `dyn StreamExtractor` use `related_item_mapper`.
    pub fn items_collector() -> StreamItemsCollector {
        StreamItemsCollector::new(related_item_from_json)
    }

    fn endpoints(&self) -> Endpoints {
        Endpoints {
            streams: self
                .config
                .streams_api_url
                .clone()
                .unwrap_or_else(|| STREAMS_API_URL.to_string()),
            related: self
                .config
                .related_api_url
                .clone()
                .unwrap_or_else(|| RELATED_API_URL.to_string()),
        }
    }

    pub fn resolve_api_url(&self, client_id: &str) -> String {
        let base = self.config.resolve_url.as_deref().unwrap_or(RESOLVE_URL);
        format!(
            "{base}?url={}&client_id={}",
            urlencoding::encode(&self.extractor.url),
            urlencoding::encode(client_id)
        )
    }

    /// Looks the url up on the resolve endpoint and applies the track's policy.
    pub async fn resolve(&self, client_id: &str) -> Result<SoundCloudTrack, ExtractorError> {
        if !is_track_url(&self.extractor.url) {
            return Err(ExtractorError::InvalidUrl(format!(
                "not a SoundCloud track: {}",
                self.extractor.url
            )));
        }
        debug!(url = %self.extractor.url, "Resolving SoundCloud track");
        let body = self
            .downloader
            .download(&self.resolve_api_url(client_id))
            .await?;
        let record = RawTrack::from_json(&body)?;

        let policy = record.policy();
        if !policy.is_extractable() {
            warn!(url = %self.extractor.url, policy = %policy, "Track is not available");
            return Err(ExtractorError::ContentUnavailable(policy.as_str().to_string()));
        }

        let id = value_get_i64(record.as_value(), "id").ok_or_else(|| {
            ExtractorError::ExtractionError("resolved track has no numeric id".to_string())
        })?;
        debug!(id, policy = %policy, "Resolved SoundCloud track");

        Ok(SoundCloudTrack::new(
            self.extractor.url.clone(),
            id.to_string(),
            record,
            self.endpoints(),
            Arc::clone(&self.downloader),
        ))
    }
}

#[async_trait]
impl PlatformExtractor for SoundCloud {
    fn get_extractor(&self) -> &Extractor {
        &self.extractor
    }

    fn platform_id(&self) -> &'static str {
        PLATFORM_ID
    }

    async fn fetch_page(
        &self,
        client_id: &str,
    ) -> Result<Box<dyn StreamExtractor>, ExtractorError> {
        let track = self.resolve(client_id).await?;
        Ok(Box::new(track))
    }
}
