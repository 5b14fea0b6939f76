//! Configuration system for lazyeq.
//!
//! Load engine configuration from TOML or YAML to control comparison
//! tracing and sequence short-circuits without code changes. None of these
//! settings change the result of a comparison.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use lazyeq_config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     [trace]
//!     comparisons = true
//!
//!     [sequence]
//!     count_short_circuit = false
//! "#).unwrap();
//!
//! assert!(config.trace.comparisons);
//! assert!(!config.sequence.count_short_circuit);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use lazyeq_config::EngineConfig;
//!
//! let config = EngineConfig::load("lazyeq.toml").unwrap_or_default();
//! assert!(config.sequence.count_short_circuit);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Main engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Diagnostic tracing of comparisons.
    #[serde(default)]
    pub trace: TraceConfig,

    /// Sequence comparison tuning.
    #[serde(default)]
    pub sequence: SequenceConfig,
}

impl EngineConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Enables per-comparison trace events.
    pub fn with_traced_comparisons(mut self, enabled: bool) -> Self {
        self.trace.comparisons = enabled;
        self
    }

    /// Controls whether operand renderings are attached to trace events.
    pub fn with_traced_operands(mut self, enabled: bool) -> Self {
        self.trace.operands = enabled;
        self
    }

    /// Controls the count-based early exit of sequence comparison.
    pub fn with_count_short_circuit(mut self, enabled: bool) -> Self {
        self.sequence.count_short_circuit = enabled;
        self
    }
}

/// Tracing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TraceConfig {
    /// Emit one TRACE event per comparison.
    #[serde(default)]
    pub comparisons: bool,

    /// Attach both operands to the event when the type can render them.
    #[serde(default = "default_true")]
    pub operands: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            comparisons: false,
            operands: true,
        }
    }
}

/// Sequence comparison configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SequenceConfig {
    /// Compare cheap element counts before iterating.
    #[serde(default = "default_true")]
    pub count_short_circuit: bool,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            count_short_circuit: true,
        }
    }
}

fn default_true() -> bool {
    true
}
