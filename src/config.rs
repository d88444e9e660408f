//! Configuration for format sniffing.
//!
//! Mirrors the knobs of the sniffing entry points (default tag, deep-check
//! bypass) plus the file limits used when sniffing paths, so that callers can
//! keep them in a JSON document next to the rest of their tooling settings.

use crate::error::{Result, SniffError};
use crate::io::IOLimits;
use serde::{Deserialize, Serialize};

/// Tag reported when nothing better can be guessed.
pub const DEFAULT_TAG: &str = "bin";

/// Longest default tag accepted by `SniffConfig::validate`.
pub const MAX_DEFAULT_TAG_LEN: usize = 16;

/// Master configuration for the sniffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SniffConfig {
    /// Tag returned when no heuristic produces a conclusive guess.
    pub default_tag: String,
    /// Only run the cheap tagged-container check.
    pub bypass_deep_checks: bool,
    /// Limits applied when sniffing files on disk.
    pub io: IOLimits,
}

impl Default for SniffConfig {
    fn default() -> Self {
        Self {
            default_tag: DEFAULT_TAG.to_string(),
            bypass_deep_checks: false,
            io: IOLimits::default(),
        }
    }
}

impl SniffConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = tag.into();
        self
    }

    pub fn with_bypass_deep_checks(mut self, bypass: bool) -> Self {
        self.bypass_deep_checks = bypass;
        self
    }

    pub fn with_io_limits(mut self, io: IOLimits) -> Self {
        self.io = io;
        self
    }

    /// Parse and validate a configuration from JSON. Missing fields take
    /// their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_tag.is_empty() {
            return Err(SniffError::InvalidConfig(
                "default tag must not be empty".to_string(),
            ));
        }
        if self.default_tag.len() > MAX_DEFAULT_TAG_LEN {
            return Err(SniffError::InvalidConfig(format!(
                "default tag is {} bytes long (limit: {})",
                self.default_tag.len(),
                MAX_DEFAULT_TAG_LEN
            )));
        }
        if !self.default_tag.is_ascii() {
            return Err(SniffError::InvalidConfig(format!(
                "default tag {:?} is not ASCII",
                self.default_tag
            )));
        }
        if self.io.max_file_size == 0 {
            return Err(SniffError::InvalidConfig(
                "max_file_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
