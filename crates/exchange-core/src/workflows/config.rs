use super::equation::trim_blanks;
use phf::{Set, phf_set};
use std::collections::BTreeSet;
use thiserror::Error;

/// Header lines dropped from batch input unless configured otherwise.
pub static DEFAULT_HEADER_LINES: Set<&'static str> = phf_set! {
    "INPUT", "OUTPUT",
};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Header lines must not be empty or whitespace-only")]
    EmptyHeaderLine,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    header_lines: BTreeSet<String>,
}

impl BatchConfig {
    /// Returns `true` if the trimmed `line` is one of the configured header lines.
    pub fn is_header(&self, line: &str) -> bool {
        self.header_lines.contains(trim_blanks(line))
    }

    pub fn header_lines(&self) -> impl Iterator<Item = &str> {
        self.header_lines.iter().map(String::as_str)
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            header_lines: DEFAULT_HEADER_LINES
                .iter()
                .map(|line| line.to_string())
                .collect(),
        }
    }
}

#[derive(Default)]
pub struct BatchConfigBuilder {
    header_lines: Option<Vec<String>>,
}

impl BatchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one header line. Once any header line is given the defaults are replaced.
    pub fn header_line(mut self, line: impl Into<String>) -> Self {
        self.header_lines
            .get_or_insert_with(Vec::new)
            .push(line.into());
        self
    }

    /// Replaces the header set with `lines`. An empty iterator disables header filtering.
    pub fn header_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_lines = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Result<BatchConfig, ConfigError> {
        let Some(lines) = self.header_lines else {
            return Ok(BatchConfig::default());
        };

        let header_lines = lines
            .into_iter()
            .map(|line| {
                let trimmed = trim_blanks(&line);
                if trimmed.is_empty() {
                    Err(ConfigError::EmptyHeaderLine)
                } else {
                    Ok(trimmed.to_string())
                }
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(BatchConfig { header_lines })
    }
}
