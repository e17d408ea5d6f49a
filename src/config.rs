//! Tool configuration.
//!
//! Loaded from `devfolio.toml` in the working directory (or a path given
//! with `--config`). Every key is optional; a missing file means stock
//! defaults. Unknown keys are rejected to catch typos early.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! store_dir = "portfolios"   # Directory of portfolio records
//! output_dir = "dist"        # Where the generated site is written
//!
//! [render]
//! # theme = "dark"           # Force a theme regardless of the record's own
//!
//! [github]
//! api_base = "https://api.github.com"
//! user_agent = "devfolio"
//! ```
//!
//! CLI flags override config values; config values override the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `devfolio.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory of portfolio records.
    pub store_dir: String,
    /// Where the generated site is written.
    pub output_dir: String,
    /// Rendering options.
    pub render: RenderConfig,
    /// GitHub API settings for prefill.
    pub github: GithubConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: "portfolios".to_string(),
            output_dir: "dist".to_string(),
            render: RenderConfig::default(),
            github: GithubConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Force a theme for every render, overriding the record's selection.
    /// An unregistered id degrades to the default theme like any other.
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GithubConfig {
    pub api_base: String,
    pub user_agent: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            user_agent: concat!("devfolio/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Load config from `path`, or stock defaults if the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_dir.is_empty() {
            return Err(ConfigError::Validation("store_dir must not be empty".into()));
        }
        if self.output_dir.is_empty() {
            return Err(ConfigError::Validation("output_dir must not be empty".into()));
        }
        if self.github.api_base.is_empty() {
            return Err(ConfigError::Validation(
                "github.api_base must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// A documented stock `devfolio.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> String {
    "\
# devfolio configuration
# All options are optional - defaults shown below

# Directory of portfolio records (one <user-id>.json per user)
store_dir = \"portfolios\"

# Where the generated site is written
output_dir = \"dist\"

[render]
# Force a theme for every render, overriding the record's selection.
# Registered themes: default, dark, creative-grid.
# theme = \"dark\"

[github]
# API endpoint and User-Agent used by the prefill command
api_base = \"https://api.github.com\"
# user_agent = \"devfolio/0.3.0\"
"
    .to_string()
}
