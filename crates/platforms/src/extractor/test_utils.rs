//! In-memory transport for extractor tests.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::extractor::error::ExtractorError;
use crate::extractor::platform_extractor::Downloader;

enum Route {
    Body(String),
    ConnectionRefused,
}

/// Answers requests whose url contains a registered fragment, first match wins.
/// Every requested url is recorded.
#[derive(Default)]
pub struct MockDownloader {
    routes: Mutex<Vec<(String, Route)>>,
    requests: Mutex<Vec<String>>,
}

impl MockDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url_fragment: &str, body: &str) -> Self {
        self.routes
            .lock()
            .push((url_fragment.to_string(), Route::Body(body.to_string())));
        self
    }

    pub fn refuse(self, url_fragment: &str) -> Self {
        self.routes
            .lock()
            .push((url_fragment.to_string(), Route::ConnectionRefused));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Downloader for MockDownloader {
    async fn download(&self, url: &str) -> Result<String, ExtractorError> {
        self.requests.lock().push(url.to_string());
        let routes = self.routes.lock();
        match routes.iter().find(|(fragment, _)| url.contains(fragment.as_str())) {
            Some((_, Route::Body(body))) => Ok(body.clone()),
            Some((_, Route::ConnectionRefused)) | None => Err(ExtractorError::IoError(
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, url.to_string()),
            )),
        }
    }
}
