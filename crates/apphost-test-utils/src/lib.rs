//! Shared test utilities for the apphost workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`app`]: [`TestApp`](app::TestApp) builder for temporary application roots
//! - [`lockfiles`]: generators for the lockfile formats the resolver reads

pub mod app;
pub mod lockfiles;

pub use app::TestApp;
