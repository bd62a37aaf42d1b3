//! Typed, validated model of `apphosting.yaml`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A validated `apphosting.yaml`.
///
/// The default value is what a build without the file uses: no run config
/// overrides and no environment variables.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppHostingSchema {
    pub run_config: RunConfig,
    /// Environment variables in document order. Duplicates are kept.
    pub env: Vec<EnvironmentVariable>,
}

impl AppHostingSchema {
    /// Whether the document sets anything at all.
    pub fn is_empty(&self) -> bool {
        self.run_config.is_empty() && self.env.is_empty()
    }

    /// Environment variables materialized at `stage`, in document order.
    pub fn env_for(&self, stage: Availability) -> impl Iterator<Item = &EnvironmentVariable> {
        self.env.iter().filter(move |var| var.is_available(stage))
    }
}

/// Service settings. `None` means "use the system default"; zero is a
/// legitimate distinct value (e.g. `minInstances: 0`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RunConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f32>,
    #[serde(rename = "memoryMiB", skip_serializing_if = "Option::is_none")]
    pub memory_mib: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<i32>,
    #[serde(rename = "maxInstances", skip_serializing_if = "Option::is_none")]
    pub max_instances: Option<i32>,
    #[serde(rename = "minInstances", skip_serializing_if = "Option::is_none")]
    pub min_instances: Option<i32>,
}

impl RunConfig {
    pub fn is_empty(&self) -> bool {
        self.cpu.is_none()
            && self.memory_mib.is_none()
            && self.concurrency.is_none()
            && self.max_instances.is_none()
            && self.min_instances.is_none()
    }
}

/// An environment variable with exactly one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentVariable {
    pub variable: String,
    #[serde(flatten)]
    pub source: EnvSource,
    /// Empty means the variable is available at every stage.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub availability: Vec<Availability>,
}

impl EnvironmentVariable {
    pub fn is_available(&self, stage: Availability) -> bool {
        self.availability.is_empty() || self.availability.contains(&stage)
    }

    /// The literal value, if this variable is not secret-backed.
    pub fn value(&self) -> Option<&str> {
        match &self.source {
            EnvSource::Value(value) => Some(value),
            EnvSource::Secret(_) => None,
        }
    }

    /// The secret reference, if this variable is secret-backed.
    pub fn secret(&self) -> Option<&str> {
        match &self.source {
            EnvSource::Secret(secret) => Some(secret),
            EnvSource::Value(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvSource {
    /// A literal value.
    Value(String),
    /// A reference to a secret held by the secret manager.
    Secret(String),
}

/// When an environment variable is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Availability {
    Build,
    Runtime,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Build => "BUILD",
            Self::Runtime => "RUNTIME",
        }
    }
}

/// Tags are case-sensitive, as written in the document.
impl FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUILD" => Ok(Self::Build),
            "RUNTIME" => Ok(Self::Runtime),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
