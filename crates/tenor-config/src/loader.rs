//! Reading and writing TOML and JSON files.
//!
//! The format is chosen from the file extension, so the same settings,
//! instrument lists and curves can be kept in either form.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ConfigError, ConfigResult, Validate};
use crate::settings::TenorConfig;

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// TOML (`.toml`).
    Toml,
    /// JSON (`.json`).
    Json,
}

impl Format {
    /// Picks the format from the extension of `path`, ignoring case.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(Format::Toml),
            Some("json") => Ok(Format::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Parses `text` in this format.
    pub fn parse<T: DeserializeOwned>(self, text: &str) -> ConfigResult<T> {
        match self {
            Format::Toml => Ok(toml::from_str(text)?),
            Format::Json => Ok(serde_json::from_str(text)?),
        }
    }

    /// Renders `value` in this format.
    pub fn render<T: Serialize>(self, value: &T) -> ConfigResult<String> {
        match self {
            Format::Toml => Ok(toml::to_string_pretty(value)?),
            Format::Json => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}

/// Reads and parses a TOML or JSON file.
pub fn load_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> ConfigResult<T> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    format.parse(&text)
}

/// Writes `value` as TOML or JSON, chosen by the extension of `path`.
pub fn save_file<T: Serialize>(value: &T, path: impl AsRef<Path>) -> ConfigResult<()> {
    let path = path.as_ref();
    let text = Format::from_path(path)?.render(value)?;
    fs::write(path, text).map_err(|e| ConfigError::io(path, e))
}

impl TenorConfig {
    /// Loads and validates a settings file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let config: Self = load_file(path)?;
        config.validate_or_error()?;
        Ok(config)
    }
}
