//! Lockfile readers.
//!
//! Each supported lockfile format implements [`LockfileReader`]. The readers
//! are consulted in [`READERS`] order, which matches
//! [`AppFile::LOCKFILES`](apphost_fs::AppFile::LOCKFILES).

mod npm;
mod pnpm;
mod yarn;

pub use npm::NpmLockfile;
pub use pnpm::PnpmLockfile;
pub use yarn::YarnLockfile;

use apphost_fs::{AppFile, NormalizedPath};

use crate::error::Result;

/// The dependency being looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyQuery<'a> {
    /// Package name, e.g. `next`.
    pub name: &'a str,
    /// Specifier declared in `package.json`. Used by formats that key entries
    /// by specifier to pick between several installed majors.
    pub declared: &'a str,
}

impl<'a> DependencyQuery<'a> {
    pub fn new(name: &'a str, declared: &'a str) -> Self {
        Self { name, declared }
    }
}

/// A lockfile format.
pub trait LockfileReader: Send + Sync {
    /// The file this reader consumes, relative to the app root.
    fn file(&self) -> AppFile;

    /// Find the installed version of `query.name` in `content`.
    ///
    /// Returns `Ok(None)` when the lockfile has no entry for the dependency and
    /// an error when the content cannot be parsed. `path` is used for error
    /// reporting only.
    fn find_version(
        &self,
        path: &NormalizedPath,
        content: &str,
        query: &DependencyQuery<'_>,
    ) -> Result<Option<String>>;
}

/// Readers in resolution priority order.
pub static READERS: [&dyn LockfileReader; 4] = [
    &PnpmLockfile,
    &YarnLockfile,
    &NpmLockfile::SHRINKWRAP,
    &NpmLockfile::PACKAGE_LOCK,
];
