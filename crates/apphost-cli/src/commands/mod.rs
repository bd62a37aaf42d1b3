//! Command implementations

mod adaptor;
mod resolve;
mod validate;

pub use adaptor::run_adaptor_version;
pub use resolve::run_resolve;
pub use validate::run_validate;
