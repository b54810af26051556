//! Configuration file handling for ascii-grid.
//!
//! Loads configuration from `~/.config/ascii-grid/config.toml` or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ascii::{AspectCorrection, CellUnit, Filter, ResolveOptions};

/// Configuration file structure for ascii-grid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sizing: SizingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SizingConfig {
    /// Cell width / cell height; width-derived heights are scaled by this
    #[serde(default)]
    pub aspect_correction: AspectCorrection,
    #[serde(default)]
    pub filter: Filter,
    /// Sample 2x4 pixels per cell
    #[serde(default)]
    pub braille: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub flip_x: bool,
    #[serde(default)]
    pub flip_y: bool,
}

/// Commented default config written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# ascii-grid configuration

[sizing]
# Cell width divided by cell height. Heights derived from a width are
# multiplied by this, widths derived from a height are divided by it.
aspect_correction = 0.5
# Resampling filter: nearest, triangle, catmull-rom, gaussian, lanczos3
filter = "lanczos3"
# Sample a 2x4 dot matrix per cell
braille = false

[output]
# Mirror horizontally
flip_x = false
# Mirror vertically
flip_y = false
"#;

impl Config {
    /// Load configuration from the default path.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from a path the user asked for. The file must exist.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Self::load_from(path)
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            cell_unit: if self.sizing.braille {
                CellUnit::BRAILLE
            } else {
                CellUnit::TEXT
            },
            aspect: self.sizing.aspect_correction,
            filter: self.sizing.filter,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-grid").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-grid/config.toml")
        })
}
