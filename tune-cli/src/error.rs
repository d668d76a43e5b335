use audio_platforms::ExtractorError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Extractor(#[from] ExtractorError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("could not write config file: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
    #[error("invalid extras: {0}")]
    InvalidExtras(String),
    #[error("no client id configured; pass --client-id or set SOUNDCLOUD_CLIENT_ID")]
    MissingClientId,
}
