use anyhow::{bail, Context, Result};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the progress report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The two human-readable lines
    #[default]
    Text,
    /// One line of JSON
    Json,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown output format '{0}' (expected 'text' or 'json')")]
pub struct ParseFormatError(String);

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output_format: OutputFormat,

    /// Extension of translation files, without the leading dot
    pub file_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            file_extension: "ts".to_string(),
        }
    }
}

impl Config {
    /// Read optional overrides from the environment. With nothing set this
    /// returns `Config::default()`.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let output_format = match std::env::var("PROGRESS_FORMAT") {
            Ok(value) => value
                .parse::<OutputFormat>()
                .context("PROGRESS_FORMAT is invalid")?,
            Err(_) => defaults.output_format,
        };

        let file_extension = match std::env::var("TRANSLATION_FILE_EXT") {
            Ok(value) => {
                let trimmed = value.trim().trim_start_matches('.');
                if trimmed.is_empty() {
                    bail!("TRANSLATION_FILE_EXT must not be empty");
                }
                trimmed.to_string()
            }
            Err(_) => defaults.file_extension,
        };

        Ok(Self {
            output_format,
            file_extension,
        })
    }
}
