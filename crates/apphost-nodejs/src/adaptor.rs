//! Next.js build adaptor version selection.
//!
//! The adaptor is published once per Next.js major.minor band, so the
//! framework specifier has to be coarsened before it is sent to the package
//! feed.

use crate::range::{Clause, Operator, VersionRange};

/// npm package of the Next.js App Hosting adaptor.
pub const ADAPTOR_PACKAGE: &str = "@apphosting/adapter-nextjs";

/// Binary the adaptor package exposes for running the framework build.
pub const ADAPTOR_BUILD_BIN: &str = "apphosting-adapter-nextjs-build";

/// Specifier requested when the framework specifier cannot be understood.
pub const LATEST: &str = "latest";

/// Translate a Next.js specifier into the adaptor specifier to request.
///
/// A concrete version maps to its `major.minor`. A range keeps its clauses
/// with the patch component dropped; strict bounds become inclusive where
/// dropping the patch would otherwise exclude the intended band. Anything
/// else maps to `"latest"`.
///
/// ```
/// use apphost_nodejs::normalize_adaptor_version;
///
/// assert_eq!(normalize_adaptor_version("14.2.3"), "14.2");
/// assert_eq!(normalize_adaptor_version("<14.0.15"), "<=14.0");
/// assert_eq!(normalize_adaptor_version(">13.0.2"), ">=13.0");
/// assert_eq!(normalize_adaptor_version("not-a-version"), "latest");
/// ```
pub fn normalize_adaptor_version(specifier: &str) -> String {
    if let Ok(version) = semver::Version::parse(specifier) {
        return format!("{}.{}", version.major, version.minor);
    }

    let range = match VersionRange::parse(specifier) {
        Ok(range) => range,
        Err(e) => {
            tracing::debug!(specifier, error = %e, "Unrecognized specifier, requesting latest adaptor");
            return LATEST.to_string();
        }
    };

    range
        .alternatives()
        .iter()
        .map(|group| {
            group
                .iter()
                .map(truncate_clause)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" || ")
}

/// Drop the patch component of a three-part clause.
///
/// `<14.0.15` must become `<=14.0`, since `<14.0` would exclude 14.0 itself.
/// A zero patch (`<14.0.0`) already excludes the whole band and stays strict.
/// `>` always becomes `>=`. Clauses with any other number of components are
/// left untouched.
fn truncate_clause(clause: &Clause) -> String {
    let components = clause.components();
    let [major, minor, patch] = components.as_slice() else {
        return clause.to_string();
    };

    let op = match clause.op() {
        Operator::Lt if !patch.starts_with('0') => Operator::Lte,
        Operator::Gt => Operator::Gte,
        op => op,
    };
    format!("{op}{major}.{minor}")
}

/// What to install for a given Next.js version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptorRequest {
    version: String,
}

impl AdaptorRequest {
    /// Build the request for a declared or resolved Next.js specifier.
    pub fn for_nextjs(nextjs_specifier: &str) -> Self {
        Self {
            version: normalize_adaptor_version(nextjs_specifier),
        }
    }

    /// The adaptor specifier, e.g. `14.2` or `>=13.0 <=14.0`.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Package spec to hand to the installer, e.g. `@apphosting/adapter-nextjs@14.2`.
    pub fn package_spec(&self) -> String {
        format!("{ADAPTOR_PACKAGE}@{}", self.version)
    }

    /// Package spec to retry with when installing [`Self::package_spec`] fails.
    pub fn fallback_spec() -> String {
        format!("{ADAPTOR_PACKAGE}@{LATEST}")
    }

    /// Whether a previously installed adaptor recorded as `cached_version`
    /// satisfies this request.
    pub fn is_cached(&self, cached_version: Option<&str>) -> bool {
        cached_version == Some(self.version.as_str())
    }
}

/// Command that runs the adaptor's build from the directory it was installed into.
pub fn build_script_command(adaptor_dir: &str) -> String {
    format!("npm exec --prefix {adaptor_dir} {ADAPTOR_BUILD_BIN}")
}
