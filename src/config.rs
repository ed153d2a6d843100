//! Build configuration.
//!
//! Two layers feed a build:
//!
//! - [`BuildConfig`]: where to read entries from and where to write the site.
//!   Built once from the command line and passed down explicitly.
//! - [`SiteConfig`]: optional `config.toml` in the input root that tunes the
//!   rendered output.
//!
//! ## Config File
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! escape_html = true        # Escape entry names and note text in the HTML
//! # stylesheet = "site.css" # Custom CSS (relative to the input root)
//! ```
//!
//! The input root only turns subdirectories into entries, so `config.toml`
//! never shows up as a page. Unknown keys are rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Directory holding one subdirectory per entry
    pub input: PathBuf,
    /// Directory receiving the generated site
    pub output: PathBuf,
}

impl BuildConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Rendering options loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Escape entry names and content. `false` interpolates them raw.
    pub escape_html: bool,
    /// Custom stylesheet, relative to the input root.
    pub stylesheet: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            escape_html: true,
            stylesheet: None,
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(css) = &self.stylesheet
            && css.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "stylesheet must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Resolve the custom stylesheet against the input root.
    pub fn stylesheet_path(&self, root: &Path) -> Option<PathBuf> {
        self.stylesheet.as_ref().map(|css| root.join(css))
    }
}

/// Load `config.toml` from the input root, falling back to defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join(CONFIG_FILE);
    if !path.is_file() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A documented `config.toml` with every option at its default.
pub fn stock_config_toml() -> &'static str {
    r#"# glob-site configuration
#
# Place this file in the input directory next to the entry folders.
# Every key is optional.

# Escape entry names and note text before inserting them into the page.
# Set to false to interpolate them raw (legacy output).
escape_html = true

# Custom stylesheet copied to style.css, relative to the input directory.
# When omitted the bundled stylesheet is used.
# stylesheet = "site.css"
"#
}
