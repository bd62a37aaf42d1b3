//! Format-aware loading of structured documents

use crate::{Error, NormalizedPath, Result, io};
use serde::de::DeserializeOwned;

/// Structured document formats understood by [`ConfigStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Detect a format from a file extension (case-insensitive).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Detect the format of `path` from its extension.
    pub fn for_path(path: &NormalizedPath) -> Result<Self> {
        let extension = path.extension().unwrap_or("");
        Self::from_extension(extension).ok_or_else(|| Error::UnsupportedFormat {
            extension: extension.to_string(),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Format-aware document store.
///
/// Lockfiles and manifests have fixed names, so callers usually pick the
/// format explicitly with [`ConfigStore::load_as`]; [`ConfigStore::load`]
/// falls back to extension detection.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a document, detecting the format from the file extension:
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let format = Format::for_path(path)?;
        self.load_as(path, format)
    }

    /// Load a document in an explicit format.
    pub fn load_as<T: DeserializeOwned>(&self, path: &NormalizedPath, format: Format) -> Result<T> {
        let content = io::read_text(path)?;
        self.parse(path, &content, format)
    }

    /// Load a document in an explicit format, returning `Ok(None)` when the
    /// file does not exist.
    pub fn load_optional_as<T: DeserializeOwned>(
        &self,
        path: &NormalizedPath,
        format: Format,
    ) -> Result<Option<T>> {
        match io::read_optional_text(path)? {
            Some(content) => self.parse(path, &content, format).map(Some),
            None => Ok(None),
        }
    }

    /// Parse already-read content. `path` is only used for error reporting.
    pub fn parse<T: DeserializeOwned>(
        &self,
        path: &NormalizedPath,
        content: &str,
        format: Format,
    ) -> Result<T> {
        let parsed = match format {
            Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::ConfigParse {
            path: path.to_native(),
            format: format.name().into(),
            message,
        })
    }
}
