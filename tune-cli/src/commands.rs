use crate::{
    cli::OutputFormat,
    config::AppConfig,
    error::{CliError, Result},
    output::OutputManager,
};
use audio_platforms::{
    PlatformExtractor,
    extractor::{
        collector::StreamItemsCollector, default::client_with_timeout,
        factory::ExtractorFactory, platform_configs::merge_platform_extras,
    },
};
use std::time::Duration;
use tracing::{debug, info};

pub struct CommandExecutor {
    config: AppConfig,
    client_id: Option<String>,
    factory: ExtractorFactory,
    output_manager: OutputManager,
}

impl CommandExecutor {
    pub fn new(config: AppConfig, client_id: Option<String>, timeout: Option<Duration>) -> Self {
        let client = client_with_timeout(timeout.unwrap_or_else(|| config.timeout()));
        Self {
            client_id: client_id.or_else(|| config.client_id.clone()),
            config,
            factory: ExtractorFactory::new(client),
            output_manager: OutputManager::new(true),
        }
    }

    fn client_id(&self) -> Result<&str> {
        self.client_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(CliError::MissingClientId)
    }

    fn output_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.unwrap_or(self.config.output)
    }

    fn extras(&self, cli_extras: Option<&str>) -> Result<Option<serde_json::Value>> {
        let overlay = cli_extras
            .map(|raw| {
                let value: serde_json::Value = serde_json::from_str(raw)
                    .map_err(|e| CliError::InvalidExtras(e.to_string()))?;
                if value.is_object() {
                    Ok(value)
                } else {
                    Err(CliError::InvalidExtras("expected a JSON object".to_string()))
                }
            })
            .transpose()?;
        Ok(merge_platform_extras(self.config.extras_json()?, overlay))
    }

    fn create_extractor(
        &self,
        url: &str,
        extras: Option<&str>,
    ) -> Result<Box<dyn PlatformExtractor>> {
        let extractor = self.factory.create_extractor(url, self.extras(extras)?)?;
        debug!(platform = extractor.platform_id(), "Using extractor");
        Ok(extractor)
    }

    pub async fn extract(
        &self,
        url: &str,
        extras: Option<&str>,
        output: Option<OutputFormat>,
        with_streams: bool,
    ) -> Result<()> {
        let client_id = self.client_id()?;
        let extractor = self.create_extractor(url, extras)?;

        let track = extractor.fetch_page(client_id).await?;
        let info = track.info()?;
        info!(id = %info.id, title = %info.title, "Resolved track");

        let streams = if with_streams {
            track.audio_streams(client_id).await?
        } else {
            Vec::new()
        };

        let rendered =
            self.output_manager.format_track(&info, &streams, self.output_format(output))?;
        println!("{rendered}");
        Ok(())
    }

    pub async fn related(
        &self,
        url: &str,
        extras: Option<&str>,
        output: Option<OutputFormat>,
    ) -> Result<()> {
        let client_id = self.client_id()?;
        let extractor = self.create_extractor(url, extras)?;
        let track = extractor.fetch_page(client_id).await?;

        let mut collector = StreamItemsCollector::new(track.related_item_mapper());
        track.related_items(client_id, &mut collector).await?;
        if !collector.errors().is_empty() {
            info!(skipped = collector.errors().len(), "Some related tracks were skipped");
        }

        let rendered = self
            .output_manager
            .format_related(collector.items(), self.output_format(output))?;
        println!("{rendered}");
        Ok(())
    }

    pub fn list_platforms(&self) {
        for platform in self.factory.supported_platforms() {
            println!("{platform}");
        }
    }
}
