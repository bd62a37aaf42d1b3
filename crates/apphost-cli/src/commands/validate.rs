//! Validate command implementation

use std::path::Path;

use apphost_schema::{AppHostingSchema, Availability, EnvSource};
use colored::Colorize;

use crate::error::Result;

/// Validate the config at `path` and print a summary, or the validated
/// document as JSON when `json` is set.
pub fn run_validate(path: &Path, json: bool) -> Result<()> {
    tracing::debug!(path = %path.display(), "Validating config");

    let schema = apphost_schema::load(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    println!("{} {}", "valid".green().bold(), path.display());
    print_summary(&schema);
    Ok(())
}

fn print_summary(schema: &AppHostingSchema) {
    if schema.is_empty() {
        println!("  {}", "(no overrides, using defaults)".dimmed());
        return;
    }

    let run = &schema.run_config;
    let fields = [
        ("cpu", run.cpu.map(|v| v.to_string())),
        ("memoryMiB", run.memory_mib.map(|v| v.to_string())),
        ("concurrency", run.concurrency.map(|v| v.to_string())),
        ("maxInstances", run.max_instances.map(|v| v.to_string())),
        ("minInstances", run.min_instances.map(|v| v.to_string())),
    ];
    for (name, value) in fields {
        if let Some(value) = value {
            println!("  {}: {}", name.cyan(), value);
        }
    }

    for var in &schema.env {
        let source = match &var.source {
            EnvSource::Value(_) => "value".normal(),
            EnvSource::Secret(secret) => format!("secret {secret}").yellow(),
        };
        let stages = if var.availability.is_empty() {
            "BUILD,RUNTIME".to_string()
        } else {
            var.availability
                .iter()
                .map(Availability::as_str)
                .collect::<Vec<_>>()
                .join(",")
        };
        println!("  {} ({}) [{}]", var.variable.cyan(), source, stages);
    }
}
