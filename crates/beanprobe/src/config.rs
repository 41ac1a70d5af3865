//! Inspector configuration
//!
//! Options can be built in code or read from the `[inspector]` table of a
//! TOML file:
//!
//! ```toml
//! [inspector]
//! report-boxed-primitives = true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading inspector options
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How a [`PropertyInspector`] reports what it finds
///
/// [`PropertyInspector`]: crate::PropertyInspector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct InspectorOptions {
    /// Report primitive property types as their boxed classes,
    /// e.g. `Integer` instead of `int`
    pub report_boxed_primitives: bool,
}

/// Top level of a configuration file; other tables are ignored
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    inspector: InspectorOptions,
}

impl InspectorOptions {
    /// Options that report boxed classes for primitive types
    pub fn boxed() -> Self {
        Self {
            report_boxed_primitives: true,
        }
    }

    /// Parse options from TOML text
    ///
    /// A document without an `[inspector]` table yields the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.inspector)
    }

    /// Load options from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
