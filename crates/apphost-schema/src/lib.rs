//! `apphosting.yaml` parsing and validation.
//!
//! Loading happens in two phases: the YAML is first deserialized into the
//! structural [`raw`] types, then [`RawAppHostingSchema::validate`] checks
//! every domain constraint and produces the typed [`AppHostingSchema`].
//! Validation stops at the first violation.
//!
//! A missing file is not an error: [`load`] returns the default document so
//! builds without an `apphosting.yaml` use system defaults.

pub mod error;
pub mod loader;
pub mod raw;
pub mod schema;
pub mod validation;

pub use error::{Error, Result, ValidationError};
pub use loader::{load, parse_str};
pub use raw::{RawAppHostingSchema, RawEnvironmentVariable, RawRunConfig};
pub use schema::{AppHostingSchema, Availability, EnvSource, EnvironmentVariable, RunConfig};
