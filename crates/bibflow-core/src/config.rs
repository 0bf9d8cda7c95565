//! Configuration for bibflow
//!
//! Reformatting options, rename defaults and journal abbreviation
//! overrides, loaded from `config.toml` in the user's config directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::filename::DEFAULT_EXTENSION;
use crate::journals::AbbreviationTable;
use crate::options::FormatOptions;

/// System-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BibflowConfig {
    /// Reformatting passes
    pub format: FormatOptions,
    /// File rename settings
    pub rename: RenameConfig,
    /// Extra journal abbreviations
    pub journals: JournalConfig,
}

/// File rename configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameConfig {
    /// Extension used when suggesting a name without an original file
    pub default_extension: String,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            default_extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// Journal abbreviation overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    /// Full journal title to abbreviation, e.g.
    /// `"Journal of Cosmology and Astroparticle Physics" = "JCAP"`
    pub abbreviations: BTreeMap<String, String>,
}

impl BibflowConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location: `<config dir>/bibflow/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bibflow").join("config.toml"))
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate configuration from a file.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config = Self::from_toml(&text)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from the default location, or defaults if there is none
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ext = self.rename.default_extension.trim_start_matches('.');
        if ext.is_empty() {
            return Err(ConfigError::Invalid(
                "rename.default_extension must not be empty".to_string(),
            ));
        }
        if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::Invalid(format!(
                "rename.default_extension {ext:?} must be alphanumeric"
            )));
        }

        if let Some((title, _)) = self
            .journals
            .abbreviations
            .iter()
            .find(|(title, abbrev)| title.trim().is_empty() || abbrev.trim().is_empty())
        {
            return Err(ConfigError::Invalid(format!(
                "journals.abbreviations entry {title:?} is empty"
            )));
        }

        Ok(())
    }

    /// Built-in abbreviation table extended with the configured overrides
    pub fn abbreviator(&self) -> AbbreviationTable {
        let mut table = AbbreviationTable::builtin();
        for (title, abbrev) in &self.journals.abbreviations {
            table.add_title(title, abbrev);
        }
        table
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Cannot serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
