//! Configuration module for cprl-scan.
//!
//! Settings come from an optional TOML file. Command-line flags override
//! whatever the file says.
//!
//! ```toml
//! show_positions = true
//! max_errors = 20
//! color = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{DrvError, Result};

/// Default configuration file name, looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "cprl-scan.toml";

/// Tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Prefix each token with its `line:column`.
    #[serde(default = "default_true")]
    pub show_positions: bool,

    /// Maximum number of diagnostics to print per file. Unlimited if absent.
    #[serde(default)]
    pub max_errors: Option<usize>,

    /// Use ANSI colors in log output.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_positions: true,
            max_errors: None,
            color: true,
        }
    }
}

impl Config {
    /// Load `cprl-scan.toml` from the current directory.
    ///
    /// Returns the default configuration if there is no such file.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load_from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DrvError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DrvError::Config(format!("Failed to parse configuration: {}", e)))
    }
}
