//! `npm-shrinkwrap.json` and `package-lock.json`

use std::collections::HashMap;

use apphost_fs::{AppFile, ConfigStore, Format, NormalizedPath};
use serde::Deserialize;

use super::{DependencyQuery, LockfileReader};
use crate::error::Result;

/// Reader for npm lockfiles. Shrinkwrap and package-lock share one schema.
#[derive(Debug, Clone, Copy)]
pub struct NpmLockfile {
    file: AppFile,
}

impl NpmLockfile {
    pub const SHRINKWRAP: Self = Self {
        file: AppFile::NpmShrinkwrap,
    };
    pub const PACKAGE_LOCK: Self = Self {
        file: AppFile::PackageLock,
    };
}

#[derive(Debug, Default, Deserialize)]
struct Document {
    /// lockfileVersion 2 and 3, keyed by install path.
    #[serde(default)]
    packages: HashMap<String, Package>,
    /// lockfileVersion 1, keyed by package name.
    #[serde(default)]
    dependencies: HashMap<String, Package>,
}

#[derive(Debug, Default, Deserialize)]
struct Package {
    #[serde(default)]
    version: String,
}

impl LockfileReader for NpmLockfile {
    fn file(&self) -> AppFile {
        self.file
    }

    fn find_version(
        &self,
        path: &NormalizedPath,
        content: &str,
        query: &DependencyQuery<'_>,
    ) -> Result<Option<String>> {
        let document: Document = ConfigStore::new().parse(path, content, Format::Json)?;

        let key = format!("node_modules/{}", query.name);
        let package = document
            .packages
            .get(&key)
            .or_else(|| document.dependencies.get(query.name));

        Ok(package.map(|package| package.version.clone()))
    }
}
