//! Installed-version resolution across lockfiles.

use std::fmt;

use apphost_fs::{AppFile, NormalizedPath, io};

use crate::lockfile::{DependencyQuery, READERS};

/// Where a resolved version came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    Lockfile(AppFile),
    /// No lockfile had an entry; the declared specifier is used as-is.
    Manifest,
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lockfile(file) => write!(f, "{file}"),
            Self::Manifest => f.write_str("package.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub version: String,
    pub source: VersionSource,
}

/// Resolve the installed version of `name`, returning only the version.
///
/// See [`resolve`].
pub fn resolve_installed_version(app_root: &NormalizedPath, name: &str, declared: &str) -> String {
    resolve(app_root, name, declared).version
}

/// Resolve the installed version of `name` under `app_root`.
///
/// Lockfiles are tried in priority order (pnpm, yarn, npm-shrinkwrap,
/// package-lock). The first one that exists and has a non-empty entry wins.
/// Unreadable or malformed lockfiles are skipped. When nothing matches, the
/// `declared` specifier is returned unchanged.
pub fn resolve(app_root: &NormalizedPath, name: &str, declared: &str) -> Resolution {
    let query = DependencyQuery::new(name, declared);

    for reader in READERS.iter() {
        let path = app_root.join(reader.file());
        let content = match io::read_optional_text(&path) {
            Ok(Some(content)) => content,
            Ok(None) => continue,
            Err(e) => {
                tracing::debug!(path = %path, error = %e, "Skipping unreadable lockfile");
                continue;
            }
        };

        match reader.find_version(&path, &content, &query) {
            Ok(Some(version)) if !version.is_empty() => {
                tracing::debug!(dependency = name, %version, lockfile = %reader.file(), "Resolved installed version");
                return Resolution {
                    version,
                    source: VersionSource::Lockfile(reader.file()),
                };
            }
            Ok(_) => {
                tracing::debug!(dependency = name, lockfile = %reader.file(), "No entry in lockfile");
            }
            Err(e) => {
                tracing::debug!(path = %path, error = %e, "Skipping malformed lockfile");
            }
        }
    }

    tracing::debug!(dependency = name, declared, "No lockfile entry, using declared specifier");
    Resolution {
        version: declared.to_string(),
        source: VersionSource::Manifest,
    }
}
