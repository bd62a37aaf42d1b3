//! Domain constraints applied to the structural model.

use std::fmt::Display;
use std::ops::RangeInclusive;

use crate::error::ValidationError;
use crate::raw::{RawAppHostingSchema, RawEnvironmentVariable, RawRunConfig};
use crate::schema::{AppHostingSchema, Availability, EnvSource, EnvironmentVariable, RunConfig};

pub const CPU_RANGE: RangeInclusive<f32> = 1.0..=8.0;
pub const MEMORY_MIB_RANGE: RangeInclusive<i32> = 512..=32768;
pub const CONCURRENCY_RANGE: RangeInclusive<i32> = 1..=1000;
pub const MAX_INSTANCES_RANGE: RangeInclusive<i32> = 1..=100;
pub const MIN_INSTANCES_RANGE: RangeInclusive<i32> = 0..=100;

impl RawAppHostingSchema {
    /// Check every constraint, run config first and then `env` in order.
    pub fn validate(self) -> Result<AppHostingSchema, ValidationError> {
        let run_config = match self.run_config {
            Some(raw) => RunConfig::try_from(raw)?,
            None => RunConfig::default(),
        };

        let env = self
            .env
            .unwrap_or_default()
            .into_iter()
            .map(EnvironmentVariable::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AppHostingSchema { run_config, env })
    }
}

impl TryFrom<RawRunConfig> for RunConfig {
    type Error = ValidationError;

    fn try_from(raw: RawRunConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            cpu: within("cpu", raw.cpu, CPU_RANGE)?,
            memory_mib: within("memoryMiB", raw.memory_mib, MEMORY_MIB_RANGE)?,
            concurrency: within("concurrency", raw.concurrency, CONCURRENCY_RANGE)?,
            max_instances: within("maxInstances", raw.max_instances, MAX_INSTANCES_RANGE)?,
            min_instances: within("minInstances", raw.min_instances, MIN_INSTANCES_RANGE)?,
        })
    }
}

impl TryFrom<RawEnvironmentVariable> for EnvironmentVariable {
    type Error = ValidationError;

    fn try_from(raw: RawEnvironmentVariable) -> Result<Self, Self::Error> {
        // An empty string counts as unset.
        let value = raw.value.filter(|v| !v.is_empty());
        let secret = raw.secret.filter(|s| !s.is_empty());

        let source = match (value, secret) {
            (Some(_), Some(_)) => {
                return Err(ValidationError::BothValueAndSecret {
                    variable: raw.variable,
                });
            }
            (None, None) => {
                return Err(ValidationError::MissingValueOrSecret {
                    variable: raw.variable,
                });
            }
            (Some(value), None) => EnvSource::Value(value),
            (None, Some(secret)) => EnvSource::Secret(secret),
        };

        let mut availability = Vec::new();
        for tag in raw.availability.unwrap_or_default() {
            match tag.parse::<Availability>() {
                Ok(stage) => availability.push(stage),
                Err(value) => {
                    return Err(ValidationError::InvalidAvailability {
                        variable: raw.variable,
                        value,
                    });
                }
            }
        }

        Ok(Self {
            variable: raw.variable,
            source,
            availability,
        })
    }
}

/// Absent values pass; present values must fall inside `range`. NaN never does.
fn within<T>(
    field: &'static str,
    value: Option<T>,
    range: RangeInclusive<T>,
) -> Result<Option<T>, ValidationError>
where
    T: PartialOrd + Display + Copy,
{
    match value {
        Some(v) if !range.contains(&v) => Err(ValidationError::OutOfRange {
            field,
            value: v.to_string(),
            min: range.start().to_string(),
            max: range.end().to_string(),
        }),
        other => Ok(other),
    }
}
