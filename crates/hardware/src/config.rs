//! Configuration system for the MAC pipeline model.
//!
//! This module defines the configuration structures used to parameterize the
//! clocked units. It provides:
//! 1. **Defaults:** Baseline settings used when a field is omitted.
//! 2. **Structures:** General (observability) and pipeline (forwarding) sections.
//! 3. **Enums:** The multiply → accumulate forwarding policy.
//!
//! Configuration is supplied as JSON (`Config::from_json` / `Config::from_path`)
//! or built with `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Per-cycle trace events are off unless requested.
    pub const TRACE_CYCLES: bool = false;
}

/// Where the accumulate stage reads its product operand from.
///
/// A MAC stage latches the multiplier output into a multiply-stage register
/// whenever both multiply-enables are high. The two policies differ in
/// whether the adder consumes that register or the live multiplier output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Forwarding {
    /// The adder reads the multiply-stage latch captured on an earlier edge.
    ///
    /// In the dot-product chain this also inserts the enable delay flops
    /// that let each route consume a value latched on a previous edge.
    #[default]
    #[serde(alias = "pipelined", alias = "PIPELINED")]
    Pipelined,
    /// The adder reads the live multiplier output, gated by the current
    /// cycle's multiply-enables. The multiply-stage latch is never consumed.
    #[serde(alias = "literal", alias = "LITERAL")]
    Literal,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use halfmac_core::config::{Config, Forwarding};
///
/// let config = Config::default();
/// assert_eq!(config.pipeline.forwarding, Forwarding::Pipelined);
///
/// let json = r#"{ "general": { "trace_cycles": true }, "pipeline": { "forwarding": "Literal" } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_cycles);
/// assert_eq!(config.pipeline.forwarding, Forwarding::Literal);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Observability settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Pipeline wiring settings.
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// Missing sections and fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid JSON or does
    /// not match the configuration schema.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Returns a default configuration using the given forwarding policy.
    pub fn with_forwarding(forwarding: Forwarding) -> Self {
        Self {
            pipeline: PipelineConfig { forwarding },
            ..Self::default()
        }
    }
}

/// General settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace`-level event for every clock edge of every unit.
    #[serde(default = "GeneralConfig::default_trace_cycles")]
    pub trace_cycles: bool,
}

impl GeneralConfig {
    const fn default_trace_cycles() -> bool {
        defaults::TRACE_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_cycles: defaults::TRACE_CYCLES,
        }
    }
}

/// Pipeline settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    /// Multiply → accumulate forwarding policy.
    #[serde(default)]
    pub forwarding: Forwarding,
}
