pub mod defaults;

use crate::cli::{BatchArgs, CheckArgs};
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use exchange::workflows::config::{BatchConfig, BatchConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialBatchConfig {
    #[serde(rename = "header-lines")]
    header_lines: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialCheckConfig {
    #[serde(rename = "show-counts")]
    show_counts: Option<bool>,
}

/// Settings read from the optional TOML configuration file.
///
/// Every field is optional; values given on the command line take precedence, and
/// anything left unset falls back to [`DefaultsConfig`] or the core library defaults.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    threads: Option<usize>,
    batch: Option<PartialBatchConfig>,
    check: Option<PartialCheckConfig>,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the file at `path`, or returns an empty configuration when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn resolve_threads(&self, cli_threads: Option<usize>) -> Result<Option<usize>> {
        match cli_threads
            .or(self.threads)
            .or(DefaultsConfig::default().threads)
        {
            Some(0) => Err(CliError::Config(
                "`threads` must be at least 1 when specified.".to_string(),
            )),
            threads => Ok(threads),
        }
    }

    pub fn resolve_batch(&self, args: &BatchArgs) -> Result<BatchConfig> {
        let file_lines = self
            .batch
            .as_ref()
            .and_then(|batch| batch.header_lines.as_ref());

        let builder = if !args.header_lines.is_empty() {
            debug!("Using header lines from the command line: {:?}", args.header_lines);
            BatchConfigBuilder::new().header_lines(args.header_lines.iter().cloned())
        } else if let Some(lines) = file_lines {
            debug!("Using header lines from the config file: {:?}", lines);
            BatchConfigBuilder::new().header_lines(lines.iter().cloned())
        } else {
            BatchConfigBuilder::new()
        };

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    pub fn resolve_show_counts(&self, args: &CheckArgs) -> bool {
        if args.show_counts {
            return true;
        }
        self.check
            .as_ref()
            .and_then(|check| check.show_counts)
            .unwrap_or(DefaultsConfig::default().show_counts)
    }
}
