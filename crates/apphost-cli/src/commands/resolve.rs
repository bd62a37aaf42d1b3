//! Resolve command implementation

use std::path::Path;

use apphost_fs::NormalizedPath;
use apphost_nodejs::{PackageJson, resolve};
use colored::Colorize;

use crate::error::Result;

/// Print the installed version of `name` under `app_root`.
///
/// Without an explicit specifier the one declared in `package.json` is used,
/// or the empty string if the app does not declare `name`.
pub fn run_resolve(app_root: &Path, name: &str, specifier: Option<&str>) -> Result<()> {
    let app_root = NormalizedPath::new(dunce::canonicalize(app_root)?);
    tracing::debug!(app_root = %app_root, dependency = name, "Resolving installed version");

    let declared = match specifier {
        Some(specifier) => specifier.to_string(),
        None => PackageJson::load_optional(&app_root)?
            .and_then(|manifest| manifest.declared_version(name).map(str::to_string))
            .unwrap_or_default(),
    };

    let resolution = resolve(&app_root, name, &declared);
    println!("{}", resolution.version);
    eprintln!("{} {}", "from".dimmed(), resolution.source.to_string().dimmed());
    Ok(())
}
