//! # Launch Configuration
//!
//! Settings read at startup. Window geometry and application metadata are
//! fixed for this application and deliberately absent here; see
//! [`WindowDescriptor`](crate::backend::WindowDescriptor) and
//! [`ApplicationMetadata`](crate::backend::ApplicationMetadata).
//!
//! Every section is optional in the file, so an empty file yields the defaults:
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [diagnostics]
//! list_extensions = false
//! ```

use crate::config::{Config, ConfigError};
use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log filter level; `RUST_LOG` overrides it
    pub level: String,
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.level
            .parse()
            .map_err(|_| ConfigError::Parse(format!("unknown log level: {}", self.level)))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Diagnostic output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Print every platform-supported instance extension after instance creation
    pub list_extensions: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            list_extensions: true,
        }
    }
}

/// Top-level launch configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Diagnostic output settings
    pub diagnostics: DiagnosticsConfig,
}

impl LaunchConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging.level_filter()?;
        Ok(())
    }
}

impl Config for LaunchConfig {}
