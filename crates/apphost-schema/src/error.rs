//! Error types for apphost-schema

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The config file exists but could not be read.
    #[error("Failed to read apphosting config: {0}")]
    Io(#[source] apphost_fs::Error),

    /// The config file was read but is not a legal document.
    #[error("Invalid apphosting config at {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}

impl Error {
    /// The violated constraint, if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid { source, .. } => Some(source),
            Self::Io(_) => None,
        }
    }
}

/// The first constraint a document violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("not a valid YAML document: {message}")]
    Malformed { message: String },

    #[error("runConfig.{field} field is not in valid range of [{min}, {max}] (got {value})")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("env variable '{variable}': both 'value' and 'secret' fields cannot be present")]
    BothValueAndSecret { variable: String },

    #[error("env variable '{variable}': either 'value' or 'secret' field is required")]
    MissingValueOrSecret { variable: String },

    #[error("env variable '{variable}': invalid value in 'availability': {value}")]
    InvalidAvailability { variable: String, value: String },
}

impl ValidationError {
    /// The document field the violation refers to, as spelled in YAML.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Malformed { .. } => None,
            Self::OutOfRange { field, .. } => Some(field),
            Self::BothValueAndSecret { .. } | Self::MissingValueOrSecret { .. } => Some("env"),
            Self::InvalidAvailability { .. } => Some("availability"),
        }
    }
}
