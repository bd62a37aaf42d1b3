//! Adaptor version command implementation

use apphost_nodejs::AdaptorRequest;

use crate::error::Result;

/// Print the adaptor specifier requested for a Next.js specifier.
pub fn run_adaptor_version(specifier: &str) -> Result<()> {
    let request = AdaptorRequest::for_nextjs(specifier);
    tracing::debug!(specifier, package = %request.package_spec(), "Normalized adaptor version");
    println!("{}", request.version());
    Ok(())
}
