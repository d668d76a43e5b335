use crate::extractor::collector::{ItemMapper, ItemsCollector};
use crate::extractor::default::DEFAULT_UA;
use crate::media::{AgeLimit, AudioStream, StreamType, TrackInfo, VideoStream};

use super::error::ExtractorError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use std::str::FromStr;
use tracing::debug;

/// Base extractor shared by every platform variant.
///
/// Holds the url being extracted, the HTTP client and the headers the platform
/// expects on every request.
#[derive(Debug, Clone)]
pub struct Extractor {
    // url to extract from, e.g., "https://soundcloud.com/artist/track"
    pub url: String,
    // name of the platform, e.g., "SoundCloud"
    pub platform_name: String,
    // The reqwest client
    pub client: Client,
    platform_headers: HeaderMap,
}

impl Extractor {
    pub fn new<S1: Into<String>, S2: Into<String>>(
        platform_name: S1,
        platform_url: S2,
        client: Client,
    ) -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            reqwest::header::USER_AGENT,
            HeaderValue::from_static(DEFAULT_UA),
        );
        default_headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static("application/json, text/javascript, */*; q=0.1"),
        );

        Self {
            platform_name: platform_name.into(),
            url: platform_url.into(),
            client,
            platform_headers: default_headers,
        }
    }

    /// Insert an arbitrary header. Invalid names or values are skipped.
    pub fn add_header_str<K: AsRef<str>, V: AsRef<str>>(&mut self, key: K, value: V) {
        match HeaderName::from_str(key.as_ref()) {
            Ok(name) => match HeaderValue::from_str(value.as_ref()) {
                Ok(value) => {
                    self.platform_headers.insert(name, value);
                }
                Err(e) => {
                    debug!(error = %e, "Invalid header value; skipping");
                }
            },
            Err(e) => {
                debug!(error = %e, "Invalid header name; skipping");
            }
        }
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .headers(self.platform_headers.clone())
    }

    pub fn get_platform_headers(&self) -> &HeaderMap {
        &self.platform_headers
    }
}

/// Transport seam: one GET, one body.
///
/// Retries, timeouts and proxying belong to the implementation, not to extractors.
#[async_trait]
pub trait Downloader: Send + Sync {
    async fn download(&self, url: &str) -> Result<String, ExtractorError>;
}

#[async_trait]
impl Downloader for Extractor {
    async fn download(&self, url: &str) -> Result<String, ExtractorError> {
        let response = self.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Unfetched side of a platform variant: knows its url, has not talked to the platform yet.
#[async_trait]
pub trait PlatformExtractor: Send + Sync {
    fn get_extractor(&self) -> &Extractor;

    /// Identifier the variant is registered under, e.g. `"soundcloud"`.
    fn platform_id(&self) -> &'static str;

    /// Resolves the url and applies the platform's availability policy.
    ///
    /// Succeeds at most once per url; the returned value owns the resolved record
    /// and every later query runs against it.
    async fn fetch_page(&self, client_id: &str) -> Result<Box<dyn StreamExtractor>, ExtractorError>;
}

/// Fetched side of a platform variant.
///
/// Metadata accessors are pure functions of the resolved record. `audio_streams` and
/// `related_items` issue a fresh request on every call.
#[async_trait]
pub trait StreamExtractor: Send + Sync {
    fn original_url(&self) -> &str;
    fn id(&self) -> &str;
    fn clean_url(&self) -> String;
    fn title(&self) -> Result<String, ExtractorError>;
    fn description(&self) -> Result<String, ExtractorError>;
    fn upload_date(&self) -> Result<String, ExtractorError>;
    fn thumbnail_url(&self) -> String;
    fn duration_secs(&self) -> u64;
    fn view_count(&self) -> u64;
    fn like_count(&self) -> i64;
    fn dislike_count(&self) -> i64;
    fn uploader_name(&self) -> String;
    fn uploader_url(&self) -> String;
    fn uploader_avatar_url(&self) -> String;
    fn age_limit(&self) -> AgeLimit;
    fn stream_type(&self) -> StreamType;
    fn timestamp_secs(&self) -> Result<Option<u64>, ExtractorError>;

    async fn audio_streams(&self, client_id: &str) -> Result<Vec<AudioStream>, ExtractorError>;

    /// `None` means the platform has no video at all, which is not an error.
    fn video_streams(&self) -> Option<Vec<VideoStream>>;
    fn video_only_streams(&self) -> Option<Vec<VideoStream>>;
    fn dash_mpd_url(&self) -> Option<String>;
    fn hls_url(&self) -> Option<String>;

    async fn related_items(
        &self,
        client_id: &str,
        collector: &mut dyn ItemsCollector,
    ) -> Result<(), ExtractorError>;

    /// Mapper for entries of this platform's related endpoint, for use with
    /// [`StreamItemsCollector`](crate::extractor::collector::StreamItemsCollector).
    fn related_item_mapper(&self) -> ItemMapper;

    /// Assembles the canonical record from the individual accessors.
    fn info(&self) -> Result<TrackInfo, ExtractorError> {
        Ok(TrackInfo {
            id: self.id().to_string(),
            title: self.title()?,
            description: self.description()?,
            upload_date: self.upload_date()?,
            duration_secs: self.duration_secs(),
            thumbnail_url: self.thumbnail_url(),
            view_count: self.view_count(),
            like_count: self.like_count(),
            dislike_count: self.dislike_count(),
            uploader_name: self.uploader_name(),
            uploader_url: self.uploader_url(),
            uploader_avatar_url: self.uploader_avatar_url(),
            age_limit: self.age_limit(),
            stream_type: self.stream_type(),
            timestamp_secs: self.timestamp_secs()?,
            clean_url: self.clean_url(),
        })
    }
}
