//! Well-known file names inside an application root.

use std::path::Path;

/// Files the build core knows how to read from an app root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppFile {
    /// `apphosting.yaml`, the App Hosting configuration
    AppHostingConfig,
    /// `package.json`, the npm dependency manifest
    PackageJson,
    /// `pnpm-lock.yaml`
    PnpmLock,
    /// `yarn.lock` (classic and berry)
    YarnLock,
    /// `npm-shrinkwrap.json`
    NpmShrinkwrap,
    /// `package-lock.json`
    PackageLock,
}

impl AppFile {
    /// Lockfiles in the order they are consulted when resolving versions.
    pub const LOCKFILES: [AppFile; 4] = [
        Self::PnpmLock,
        Self::YarnLock,
        Self::NpmShrinkwrap,
        Self::PackageLock,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AppHostingConfig => "apphosting.yaml",
            Self::PackageJson => "package.json",
            Self::PnpmLock => "pnpm-lock.yaml",
            Self::YarnLock => "yarn.lock",
            Self::NpmShrinkwrap => "npm-shrinkwrap.json",
            Self::PackageLock => "package-lock.json",
        }
    }
}

impl AsRef<Path> for AppFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for AppFile {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for AppFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
