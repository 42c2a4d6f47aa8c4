//! Runtime configuration for the command-line scorer.
//!
//! Values come from the environment; command-line flags override them.

use std::env;
use std::str::FromStr;

use tracing::warn;

pub const LOG_ENV: &str = "TOURNAMENT_LOG";
pub const LOG_FORMAT_ENV: &str = "TOURNAMENT_LOG_FORMAT";
pub const OUTPUT_FORMAT_ENV: &str = "TOURNAMENT_OUTPUT_FORMAT";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
    #[default]
    Text,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "text" => Ok(OutputFormat::Text),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub log_filter: String,
    pub log_format: LogFormat,
    pub output_format: OutputFormat,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
            output_format: OutputFormat::default(),
        }
    }
}

impl RuntimeConfig {
    /// Reads `TOURNAMENT_LOG` (falling back to `RUST_LOG`),
    /// `TOURNAMENT_LOG_FORMAT` and `TOURNAMENT_OUTPUT_FORMAT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let log_filter = non_empty(LOG_ENV)
            .or_else(|| non_empty("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            log_filter,
            log_format: parse_or_default(LOG_FORMAT_ENV, non_empty(LOG_FORMAT_ENV)),
            output_format: parse_or_default(OUTPUT_FORMAT_ENV, non_empty(OUTPUT_FORMAT_ENV)),
        }
    }
}

fn parse_or_default<T: FromStr + Default>(name: &str, raw: Option<String>) -> T {
    let Some(raw) = raw else {
        return T::default();
    };
    raw.parse().unwrap_or_else(|_| {
        warn!(variable = name, value = %raw, "unrecognised value, using default");
        T::default()
    })
}
