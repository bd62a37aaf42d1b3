//! Filesystem helpers for the App Hosting build core
//!
//! Provides normalized path handling, tolerant reads for files that may
//! legitimately be missing, and format-aware parsing of structured documents.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigStore, Format};
pub use constants::AppFile;
pub use error::{Error, Result};
pub use path::NormalizedPath;
