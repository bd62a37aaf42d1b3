//! Reading `apphosting.yaml` from disk.

use apphost_fs::{NormalizedPath, io};

use crate::error::{Error, Result, ValidationError};
use crate::raw::RawAppHostingSchema;
use crate::schema::AppHostingSchema;

/// Load and validate the config at `path`.
///
/// Returns the default document when the file does not exist. Any other read
/// failure is [`Error::Io`]; malformed YAML and constraint violations are
/// [`Error::Invalid`].
pub fn load(path: impl Into<NormalizedPath>) -> Result<AppHostingSchema> {
    let path = path.into();

    let Some(content) = io::read_optional_text(&path).map_err(Error::Io)? else {
        tracing::info!("Missing apphosting config at {}, using reasonable defaults", path);
        return Ok(AppHostingSchema::default());
    };

    let schema = parse_str(&content).map_err(|source| Error::Invalid {
        path: path.to_native(),
        source,
    })?;

    tracing::debug!(
        path = %path,
        env_vars = schema.env.len(),
        run_config = !schema.run_config.is_empty(),
        "Loaded apphosting config"
    );
    Ok(schema)
}

/// Parse and validate an in-memory document.
///
/// Documents with no content (blank, comments only, or an explicit `null`)
/// yield the default document.
pub fn parse_str(content: &str) -> std::result::Result<AppHostingSchema, ValidationError> {
    if !has_content(content) {
        return Ok(AppHostingSchema::default());
    }

    let raw: Option<RawAppHostingSchema> =
        serde_yaml::from_str(content).map_err(|e| ValidationError::Malformed {
            message: e.to_string(),
        })?;

    raw.unwrap_or_default().validate()
}

fn has_content(content: &str) -> bool {
    content.lines().any(|line| {
        let line = line.trim();
        !(line.is_empty() || line.starts_with('#') || line == "---" || line == "...")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_content() {
        assert!(!has_content(""));
        assert!(!has_content("   \n\n"));
        assert!(!has_content("# only a comment\n---\n"));
        assert!(has_content("env: []"));
    }

    #[test]
    fn test_explicit_null_document() {
        assert_eq!(parse_str("~\n").unwrap(), AppHostingSchema::default());
    }

    #[test]
    fn test_non_mapping_document_is_malformed() {
        assert!(matches!(
            parse_str("- just\n- a list\n"),
            Err(ValidationError::Malformed { .. })
        ));
    }
}
