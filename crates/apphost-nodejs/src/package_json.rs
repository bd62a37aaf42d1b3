//! `package.json` dependency manifest

use std::collections::BTreeMap;

use apphost_fs::{AppFile, ConfigStore, Format, NormalizedPath};
use serde::Deserialize;

use crate::error::Result;

/// The parts of `package.json` the build core reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageJson {
    /// Load `package.json` from `app_root`.
    pub fn load(app_root: &NormalizedPath) -> Result<Self> {
        let path = app_root.join(AppFile::PackageJson);
        Ok(ConfigStore::new().load(&path)?)
    }

    /// Load `package.json` from `app_root`, or `None` if the app has none.
    pub fn load_optional(app_root: &NormalizedPath) -> Result<Option<Self>> {
        let path = app_root.join(AppFile::PackageJson);
        Ok(ConfigStore::new().load_optional_as(&path, Format::Json)?)
    }

    /// The specifier declared for `name`, checking `dependencies` before
    /// `devDependencies`.
    pub fn declared_version(&self, name: &str) -> Option<&str> {
        self.dependencies
            .get(name)
            .or_else(|| self.dev_dependencies.get(name))
            .map(String::as_str)
    }
}
