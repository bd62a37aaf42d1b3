//! [`TestApp`] builder for application-root test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::lockfiles;

/// A temporary application root with helpers for writing the files the build
/// core reads.
///
/// # Example
///
/// ```rust,no_run
/// use apphost_test_utils::TestApp;
///
/// let app = TestApp::new()
///     .with_package_json(&[("next", "^14.0.0")])
///     .with_pnpm_lock(&[("next", "14.2.3(react@18.2.0)")]);
/// app.assert_file_exists("pnpm-lock.yaml");
/// ```
pub struct TestApp {
    temp_dir: TempDir,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestApp::new: failed to create temp dir"),
        }
    }

    /// Return the app root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the app root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestApp::write {}: {e}", path.display()));
        path
    }

    pub fn with_file(self, relative: &str, content: &str) -> Self {
        self.write(relative, content);
        self
    }

    pub fn with_apphosting_yaml(self, content: &str) -> Self {
        self.with_file("apphosting.yaml", content)
    }

    /// Write a `package.json` declaring `dependencies`.
    pub fn with_package_json(self, dependencies: &[(&str, &str)]) -> Self {
        let deps: serde_json::Map<String, serde_json::Value> = dependencies
            .iter()
            .map(|(name, spec)| (name.to_string(), serde_json::Value::from(*spec)))
            .collect();
        let manifest = serde_json::json!({
            "name": "test-app",
            "version": "0.1.0",
            "dependencies": deps,
        });
        let content = serde_json::to_string_pretty(&manifest).unwrap();
        self.with_file("package.json", &content)
    }

    pub fn with_pnpm_lock(self, entries: &[(&str, &str)]) -> Self {
        self.with_file("pnpm-lock.yaml", &lockfiles::pnpm(entries))
    }

    /// `entries` are `(name, declared specifier, resolved version)`.
    pub fn with_yarn_lock(self, entries: &[(&str, &str, &str)]) -> Self {
        self.with_file("yarn.lock", &lockfiles::yarn_classic(entries))
    }

    pub fn with_yarn_berry_lock(self, entries: &[(&str, &str, &str)]) -> Self {
        self.with_file("yarn.lock", &lockfiles::yarn_berry(entries))
    }

    pub fn with_package_lock(self, entries: &[(&str, &str)]) -> Self {
        self.with_file("package-lock.json", &lockfiles::npm(entries))
    }

    pub fn with_shrinkwrap(self, entries: &[(&str, &str)]) -> Self {
        self.with_file("npm-shrinkwrap.json", &lockfiles::npm(entries))
    }

    /// Assert that `path` (relative to the app root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}
