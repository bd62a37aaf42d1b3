//! Error types for apphost-nodejs

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] apphost_fs::Error),

    #[error("Invalid version range '{range}': {reason}")]
    InvalidRange { range: String, reason: String },
}

impl Error {
    pub(crate) fn invalid_range(range: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            range: range.to_string(),
            reason: reason.into(),
        }
    }
}
