//! `pnpm-lock.yaml`

use std::collections::HashMap;

use apphost_fs::{AppFile, ConfigStore, Format, NormalizedPath};
use serde::Deserialize;

use super::{DependencyQuery, LockfileReader};
use crate::error::Result;

/// Reader for pnpm lockfiles (v5 through v9).
#[derive(Debug, Clone, Copy, Default)]
pub struct PnpmLockfile;

#[derive(Debug, Default, Deserialize)]
struct Document {
    /// Single-project lockfiles before v9.
    #[serde(default)]
    dependencies: HashMap<String, Entry>,
    /// v9 lockfiles list the root project under `importers["."]`.
    #[serde(default)]
    importers: HashMap<String, Importer>,
}

#[derive(Debug, Default, Deserialize)]
struct Importer {
    #[serde(default)]
    dependencies: HashMap<String, Entry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Entry {
    /// `next: { specifier: ^14.0.0, version: 14.2.3(react@18.2.0) }`
    Detailed {
        #[serde(default)]
        version: String,
    },
    /// `next: 14.2.3` (v5)
    Plain(String),
}

impl Entry {
    fn version(&self) -> &str {
        match self {
            Self::Detailed { version } => version,
            Self::Plain(version) => version,
        }
    }
}

impl LockfileReader for PnpmLockfile {
    fn file(&self) -> AppFile {
        AppFile::PnpmLock
    }

    fn find_version(
        &self,
        path: &NormalizedPath,
        content: &str,
        query: &DependencyQuery<'_>,
    ) -> Result<Option<String>> {
        if content.trim().is_empty() {
            return Ok(None);
        }
        let document: Option<Document> = ConfigStore::new().parse(path, content, Format::Yaml)?;
        let document = document.unwrap_or_default();

        let entry = document.dependencies.get(query.name).or_else(|| {
            document
                .importers
                .get(".")
                .and_then(|root| root.dependencies.get(query.name))
        });

        // Peer-dependency qualifiers follow the version: `14.2.3(react@18.2.0)`.
        Ok(entry.map(|entry| strip_peer_suffix(entry.version()).to_string()))
    }
}

fn strip_peer_suffix(version: &str) -> &str {
    version.split('(').next().unwrap_or(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(content: &str, name: &str) -> Option<String> {
        let path = NormalizedPath::new("/app/pnpm-lock.yaml");
        PnpmLockfile
            .find_version(&path, content, &DependencyQuery::new(name, "^14.0.0"))
            .unwrap()
    }

    #[test]
    fn test_v6_detailed_entry() {
        let content = "lockfileVersion: '6.0'\n\ndependencies:\n  next:\n    specifier: ^14.0.0\n    version: 14.2.3(react-dom@18.2.0)(react@18.2.0)\n";
        assert_eq!(find(content, "next").as_deref(), Some("14.2.3"));
    }

    #[test]
    fn test_v5_plain_entry() {
        let content = "lockfileVersion: 5.4\n\ndependencies:\n  next: 13.5.6_react@18.2.0\n  react: 18.2.0\n";
        assert_eq!(find(content, "react").as_deref(), Some("18.2.0"));
    }

    #[test]
    fn test_v9_importers_entry() {
        let content = "lockfileVersion: '9.0'\n\nimporters:\n\n  .:\n    dependencies:\n      next:\n        specifier: ^15.0.0\n        version: 15.0.3(react@19.0.0)\n";
        assert_eq!(find(content, "next").as_deref(), Some("15.0.3"));
    }

    #[test]
    fn test_missing_entry() {
        let content = "lockfileVersion: '6.0'\n\ndependencies:\n  react:\n    specifier: ^18\n    version: 18.2.0\n";
        assert_eq!(find(content, "next"), None);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(find("", "next"), None);
    }

    #[test]
    fn test_malformed_document_is_error() {
        let path = NormalizedPath::new("/app/pnpm-lock.yaml");
        let result = PnpmLockfile.find_version(
            &path,
            "dependencies: [unclosed",
            &DependencyQuery::new("next", ""),
        );
        assert!(result.is_err());
    }
}
