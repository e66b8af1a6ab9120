use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::segmenter::splitter::DEFAULT_MIN_RUN_LENGTH;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO)
    pub source_language: String,

    /// Target language code (ISO)
    pub target_language: String,

    /// Split heuristic settings
    #[serde(default)]
    pub split: SplitConfig,

    /// Pairing policy for tracks of differing length
    #[serde(default)]
    pub pairing: PairingPolicy,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for the translated-text splitter
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SplitConfig {
    /// Minimum ideograph run length before a boundary can split
    #[serde(default = "default_min_run_length")]
    pub min_run_length: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            min_run_length: default_min_run_length(),
        }
    }
}

/// How to pair tracks whose entry counts differ
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PairingPolicy {
    /// Pair up to the shorter track and warn about the dropped tail
    #[default]
    Truncate,
    /// Fail the run on any length mismatch
    Strict,
}

impl PairingPolicy {
    /// Lowercase policy identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Truncate => "truncate".to_string(),
            Self::Strict => "strict".to_string(),
        }
    }
}

impl std::fmt::Display for PairingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for PairingPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "truncate" => Ok(Self::Truncate),
            "strict" => Ok(Self::Strict),
            _ => Err(anyhow!("Invalid pairing policy: {}", s)),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_min_run_length() -> usize {
    DEFAULT_MIN_RUN_LENGTH
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages
        let _source_name = crate::language_utils::get_language_name(&self.source_language)?;
        let _target_name = crate::language_utils::get_language_name(&self.target_language)?;

        if self.split.min_run_length == 0 {
            return Err(anyhow!("split.min_run_length must be at least 1"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: "en".to_string(),
            target_language: "zh".to_string(),
            split: SplitConfig::default(),
            pairing: PairingPolicy::default(),
            log_level: LogLevel::default(),
        }
    }
}
