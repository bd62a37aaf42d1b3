//! Next.js version handling for the App Hosting build core.
//!
//! Two independent operations:
//!
//! - [`normalize_adaptor_version`] turns the declared Next.js specifier into
//!   the major.minor specifier the adaptor package is published under.
//! - [`resolve_installed_version`] finds the version actually installed by
//!   reading lockfiles in a fixed priority order, falling back to the
//!   declared specifier.
//!
//! Neither operation fails: unparseable ranges map to `"latest"` and missing
//! or malformed lockfiles are skipped.

pub mod adaptor;
pub mod error;
pub mod lockfile;
pub mod package_json;
pub mod range;
pub mod resolver;

/// Package name of the Next.js framework.
pub const NEXT_JS: &str = "next";

pub use adaptor::{ADAPTOR_PACKAGE, AdaptorRequest, build_script_command, normalize_adaptor_version};
pub use error::{Error, Result};
pub use lockfile::{DependencyQuery, LockfileReader};
pub use package_json::PackageJson;
pub use range::{Clause, Operator, VersionRange};
pub use resolver::{Resolution, VersionSource, resolve, resolve_installed_version};
