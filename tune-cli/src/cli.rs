use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tune",
    version,
    about = "Extract track metadata and audio streams from hosted-audio platforms"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API client id sent with every request
    #[arg(long, global = true, env = "SOUNDCLOUD_CLIENT_ID", hide_env_values = true)]
    pub client_id: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a track url and print its metadata and audio streams
    Extract {
        url: String,

        /// Platform-specific options as a JSON object
        #[arg(short, long)]
        extras: Option<String>,

        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,

        /// Skip the streams request and print metadata only
        #[arg(long)]
        no_streams: bool,
    },

    /// List tracks the platform suggests next to a track
    Related {
        url: String,

        #[arg(short, long)]
        extras: Option<String>,

        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// List supported platforms
    Platforms,

    /// Show or reset the configuration file
    Config {
        #[arg(long)]
        show: bool,

        #[arg(long)]
        reset: bool,
    },

    /// Generate shell completions
    Completions { shell: Shell },
}

#[derive(
    ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
    JsonCompact,
}

impl Commands {
    pub fn output_format(&self) -> Option<OutputFormat> {
        match self {
            Commands::Extract { output, .. } | Commands::Related { output, .. } => *output,
            _ => None,
        }
    }
}
