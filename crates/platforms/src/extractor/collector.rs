//! Sinks that turn list endpoints into [`RelatedItem`] summaries.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::extractor::error::ExtractorError;
use crate::extractor::platform_extractor::Downloader;
use crate::media::RelatedItem;

/// Converts one upstream list entry into a summary record.
pub type ItemMapper = fn(&Value) -> Result<RelatedItem, ExtractorError>;

/// Populated by extractors with the contents of a list endpoint.
#[async_trait]
pub trait ItemsCollector: Send {
    async fn collect_from_api(
        &mut self,
        downloader: &dyn Downloader,
        api_url: &str,
    ) -> Result<(), ExtractorError>;
}

/// Default collector: downloads one page and maps each entry with a platform mapper.
///
/// Entries that fail to map are kept in [`errors`](Self::errors) and do not abort the page.
#[derive(Debug)]
pub struct StreamItemsCollector {
    mapper: ItemMapper,
    items: Vec<RelatedItem>,
    errors: Vec<ExtractorError>,
}

impl StreamItemsCollector {
    pub fn new(mapper: ItemMapper) -> Self {
        Self {
            mapper,
            items: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn commit(&mut self, entry: &Value) {
        match (self.mapper)(entry) {
            Ok(item) => self.items.push(item),
            Err(e) => {
                warn!(error = %e, "Skipping list entry");
                self.errors.push(e);
            }
        }
    }

    pub fn items(&self) -> &[RelatedItem] {
        &self.items
    }

    pub fn errors(&self) -> &[ExtractorError] {
        &self.errors
    }

    pub fn into_items(self) -> Vec<RelatedItem> {
        self.items
    }
}

#[async_trait]
impl ItemsCollector for StreamItemsCollector {
    async fn collect_from_api(
        &mut self,
        downloader: &dyn Downloader,
        api_url: &str,
    ) -> Result<(), ExtractorError> {
        let body = downloader.download(api_url).await?;
        let response: Value = serde_json::from_str(&body)?;

        let entries = match &response {
            Value::Array(entries) => entries,
            Value::Object(obj) => match obj.get("collection") {
                Some(Value::Array(entries)) => entries,
                _ => {
                    return Err(ExtractorError::ParsingError(
                        "list response has no collection array".to_string(),
                    ));
                }
            },
            _ => {
                return Err(ExtractorError::ParsingError(
                    "list response is neither an array nor an object".to_string(),
                ));
            }
        };

        debug!(count = entries.len(), "Collecting list entries");
        for entry in entries {
            self.commit(entry);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct StaticDownloader(&'static str);

    #[async_trait]
    impl Downloader for StaticDownloader {
        async fn download(&self, _url: &str) -> Result<String, ExtractorError> {
            Ok(self.0.to_string())
        }
    }

    fn name_only(entry: &Value) -> Result<RelatedItem, ExtractorError> {
        let name = entry
            .get("title")
            .and_then(Value::as_str)
            .ok_or_else(|| ExtractorError::ExtractionError("missing title".into()))?;
        Ok(RelatedItem {
            id: String::new(),
            name: name.to_string(),
            url: String::new(),
            uploader_name: String::new(),
            duration_secs: 0,
            thumbnail_url: String::new(),
            view_count: 0,
        })
    }

    #[test]
    fn test_commit_records_failures() {
        let mut collector = StreamItemsCollector::new(name_only);
        collector.commit(&json!({"title": "a"}));
        collector.commit(&json!({"nope": true}));
        assert_eq!(collector.items().len(), 1);
        assert_eq!(collector.errors().len(), 1);
    }

    #[tokio::test]
    async fn test_collect_top_level_array() {
        let mut collector = StreamItemsCollector::new(name_only);
        let downloader = StaticDownloader(r#"[{"title": "a"}, {"title": "b"}]"#);
        collector
            .collect_from_api(&downloader, "https://api.example/related")
            .await
            .unwrap();
        let names: Vec<_> = collector.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[tokio::test]
    async fn test_collect_collection_object() {
        let mut collector = StreamItemsCollector::new(name_only);
        let downloader =
            StaticDownloader(r#"{"collection": [{"title": "a"}], "next_href": "ignored"}"#);
        collector
            .collect_from_api(&downloader, "https://api.example/related")
            .await
            .unwrap();
        assert_eq!(collector.into_items().len(), 1);
    }

    #[tokio::test]
    async fn test_collect_rejects_unexpected_shape() {
        let mut collector = StreamItemsCollector::new(name_only);
        let downloader = StaticDownloader(r#""just a string""#);
        let err = collector
            .collect_from_api(&downloader, "https://api.example/related")
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractorError::ParsingError(_)));

        let downloader = StaticDownloader("not json");
        let err = collector
            .collect_from_api(&downloader, "https://api.example/related")
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractorError::JsonError(_)));
    }
}
