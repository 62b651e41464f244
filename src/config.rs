//! Checker configuration
//!
//! Read-only configuration shared by every check. Hosts construct it
//! directly or parse it from a TOML fragment embedded in their own
//! configuration files.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the generics nullability checker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Strict generics-nullability mode. Every check is a no-op while this
    /// is off.
    #[serde(default)]
    pub strict_generics_nullability: bool,

    /// Cap on nested type-argument recursion depth. Exceeding it abandons
    /// the current check with one low-severity diagnostic.
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: usize,
}

fn default_max_nesting_depth() -> usize {
    64
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            strict_generics_nullability: false,
            max_nesting_depth: default_max_nesting_depth(),
        }
    }
}

impl CheckerConfig {
    /// Configuration with strict mode enabled
    pub fn strict() -> Self {
        Self {
            strict_generics_nullability: true,
            ..Self::default()
        }
    }

    /// Parse a configuration from a TOML fragment
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Parse error
    #[error("parse error: {0}")]
    Parse(String),
    /// Serialization error
    #[error("serialization error: {0}")]
    Serialize(String),
}
