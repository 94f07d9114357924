use crate::error::{config_error, AppResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default log filter when neither RUST_LOG nor ARROW_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default location of the optional config file
pub const DEFAULT_CONFIG_PATH: &str = "config/arrow_days.toml";

/// How command output is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(config_error(&format!("Unknown output format: {}", other))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Values that may be set in the config file
#[derive(Debug, Clone, Default, Deserialize)]
struct FileConfig {
    log_filter: Option<String>,
    output: Option<OutputFormat>,
}

/// Main configuration structure for the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// tracing EnvFilter directive
    pub log_filter: String,
    /// Output format for command results
    pub output: OutputFormat,
    /// Config file that was consulted
    pub config_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output: OutputFormat::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let config_path = env::var("ARROW_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        Self::load_from(
            &config_path,
            env::var("ARROW_LOG").ok(),
            env::var("ARROW_OUTPUT").ok(),
        )
    }

    /// Merge a config file with already-read environment values.
    ///
    /// Environment values win over the file; a missing file is not an error.
    pub fn load_from(
        config_path: &Path,
        env_log_filter: Option<String>,
        env_output: Option<String>,
    ) -> AppResult<Self> {
        let file_config = if config_path.exists() {
            let content = fs::read_to_string(config_path)?;
            toml::from_str::<FileConfig>(&content)?
        } else {
            FileConfig::default()
        };

        let log_filter = env_log_filter
            .or(file_config.log_filter)
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let output = match env_output {
            Some(value) => value.parse()?,
            None => file_config.output.unwrap_or_default(),
        };

        Ok(Config {
            log_filter,
            output,
            config_path: config_path.to_path_buf(),
        })
    }
}
