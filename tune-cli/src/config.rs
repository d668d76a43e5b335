use crate::cli::OutputFormat;
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const CONFIG_DIR: &str = "tune";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// API client id; the command line and environment take precedence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub timeout_secs: u64,
    pub output: OutputFormat,
    /// Platform extras applied before the ones given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<toml::Table>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            output: OutputFormat::Pretty,
            extras: None,
        }
    }
}

impl AppConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    fn resolve_path(path: Option<&Path>) -> Option<PathBuf> {
        path.map(Path::to_path_buf).or_else(Self::default_path)
    }

    /// Loads the config file, falling back to defaults when it does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = Self::resolve_path(path) else {
            return Ok(Self::default());
        };
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let Some(path) = Self::resolve_path(path) else {
            return Err(CliError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no config directory on this system",
            )));
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.show()?)?;
        Ok(())
    }

    pub fn reset(path: Option<&Path>) -> Result<()> {
        Self::default().save(path)
    }

    pub fn show(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Config-file extras as JSON, ready to be merged with command line extras.
    pub fn extras_json(&self) -> Result<Option<serde_json::Value>> {
        self.extras
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(Into::into)
    }
}
