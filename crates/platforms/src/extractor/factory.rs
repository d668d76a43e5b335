use std::sync::LazyLock;

use super::error::ExtractorError;
use super::platform_extractor::PlatformExtractor;
use crate::extractor::platforms::{self, soundcloud::SoundCloud};
use regex::Regex;
use reqwest::Client;
use tracing::debug;

// A type alias for a thread-safe constructor function.
type ExtractorConstructor =
    fn(String, Client, Option<serde_json::Value>) -> Box<dyn PlatformExtractor>;

struct PlatformEntry {
    id: &'static str,
    regex: &'static LazyLock<Regex>,
    constructor: ExtractorConstructor,
}

macro_rules! platform_registry {
    ( $( $id:path, $regex:path => $builder:path ),+ $(,)? ) => {
        &[
            $(
                PlatformEntry {
                    id: $id,
                    regex: &$regex,
                    constructor: |url, client, extras| {
                        Box::new($builder(url, client, extras)) as Box<dyn PlatformExtractor>
                    },
                },
            )+
        ]
    };
}

// Static platform registry.
static PLATFORMS: &[PlatformEntry] = platform_registry![
    platforms::soundcloud::PLATFORM_ID, platforms::soundcloud::URL_REGEX => SoundCloud::new,
];

/// A factory for creating platform-specific extractors.
pub struct ExtractorFactory {
    client: Client,
}

impl ExtractorFactory {
    /// `client` must carry its own TLS setup: the workspace builds reqwest without a
    /// default rustls provider, so a bare `Client::new()` panics. Use
    /// [`default_client`](crate::extractor::default::default_client) or install a
    /// process-wide provider first.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Identifiers of every registered platform, in registry order.
    pub fn supported_platforms(&self) -> Vec<&'static str> {
        PLATFORMS.iter().map(|p| p.id).collect()
    }

    /// Picks the platform whose url pattern matches `url`.
    pub fn create_extractor(
        &self,
        url: &str,
        extras: Option<serde_json::Value>,
    ) -> Result<Box<dyn PlatformExtractor>, ExtractorError> {
        let platform = PLATFORMS
            .iter()
            .find(|p| p.regex.is_match(url))
            .ok_or(ExtractorError::UnsupportedExtractor)?;
        debug!(platform = platform.id, url, "Matched extractor");
        Ok((platform.constructor)(url.to_string(), self.client.clone(), extras))
    }

    /// Builds the extractor registered under `platform_id`, without matching the url.
    pub fn create_for_platform(
        &self,
        platform_id: &str,
        url: &str,
        extras: Option<serde_json::Value>,
    ) -> Result<Box<dyn PlatformExtractor>, ExtractorError> {
        let platform = PLATFORMS
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(platform_id))
            .ok_or(ExtractorError::UnsupportedExtractor)?;
        Ok((platform.constructor)(url.to_string(), self.client.clone(), extras))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::default::default_client;

    #[test]
    fn test_dispatch_by_url() {
        let factory = ExtractorFactory::new(default_client());
        let extractor = factory
            .create_extractor("https://soundcloud.com/artist/song", None)
            .ok()
            .unwrap();
        assert_eq!(extractor.platform_id(), "soundcloud");
        assert_eq!(extractor.get_extractor().platform_name, "SoundCloud");

        assert!(matches!(
            factory.create_extractor("https://example.com/a/b", None),
            Err(ExtractorError::UnsupportedExtractor)
        ));
    }

    #[test]
    fn test_dispatch_by_platform_id() {
        let factory = ExtractorFactory::new(default_client());
        let extractor = factory
            .create_for_platform("SoundCloud", "https://on.soundcloud.com/xyz", None)
            .ok()
            .unwrap();
        assert_eq!(extractor.get_extractor().url, "https://on.soundcloud.com/xyz");

        assert!(
            factory
                .create_for_platform("bandcamp", "https://x.bandcamp.com/track/y", None)
                .is_err()
        );
        assert_eq!(factory.supported_platforms(), vec!["soundcloud"]);
    }
}
