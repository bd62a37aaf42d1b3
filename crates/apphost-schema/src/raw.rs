//! Structural model of `apphosting.yaml`.
//!
//! These types mirror the document shape with no constraints attached, so a
//! document that deserializes here is well-formed but not necessarily legal.
//! Call [`RawAppHostingSchema::validate`] to get the typed model.

use serde::Deserialize;

/// Top-level document as written.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAppHostingSchema {
    #[serde(default)]
    pub run_config: Option<RawRunConfig>,
    #[serde(default)]
    pub env: Option<Vec<RawEnvironmentVariable>>,
}

/// `runConfig` as written. Field types match what the hosting backend accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct RawRunConfig {
    #[serde(default)]
    pub cpu: Option<f32>,
    #[serde(default, rename = "memoryMiB")]
    pub memory_mib: Option<i32>,
    #[serde(default)]
    pub concurrency: Option<i32>,
    #[serde(default, rename = "maxInstances")]
    pub max_instances: Option<i32>,
    #[serde(default, rename = "minInstances")]
    pub min_instances: Option<i32>,
}

/// One `env` entry as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawEnvironmentVariable {
    #[serde(default)]
    pub variable: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub availability: Option<Vec<String>>,
}
