//! Extraction of track metadata and playable audio from hosted-audio platforms.
//!
//! A url is routed by [`extractor::factory::ExtractorFactory`] to a platform variant,
//! which resolves it once ([`PlatformExtractor::fetch_page`]) and then answers metadata,
//! stream and related-item queries ([`StreamExtractor`]).

pub mod extractor;
pub mod media;

pub use extractor::default::{default_client, default_factory};
pub use extractor::error::{ErrorKind, ExtractorError};
pub use extractor::platform_extractor::{Downloader, PlatformExtractor, StreamExtractor};
