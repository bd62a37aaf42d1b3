//! Tests for loading and validating apphosting.yaml

use apphost_schema::{
    AppHostingSchema, Availability, EnvSource, Error, ValidationError, load, parse_str,
};
use apphost_test_utils::TestApp;
use rstest::rstest;

mod load_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_yields_default() {
        let schema = load("/nonexistent/path").unwrap();
        assert_eq!(schema, AppHostingSchema::default());
        assert!(schema.is_empty());
    }

    #[test]
    fn test_missing_file_in_existing_dir_yields_default() {
        let app = TestApp::new();
        let schema = load(app.path("apphosting.yaml")).unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let app = TestApp::new();
        std::fs::create_dir(app.path("apphosting.yaml")).unwrap();

        let err = load(app.path("apphosting.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)), "got {err:?}");
        assert!(err.validation().is_none());
    }

    #[test]
    fn test_full_document() {
        let app = TestApp::new().with_apphosting_yaml(
            r#"
runConfig:
  cpu: 2
  memoryMiB: 1024
  concurrency: 80
  maxInstances: 10
  minInstances: 0
env:
  - variable: API_URL
    value: https://api.example.com
    availability:
      - BUILD
      - RUNTIME
  - variable: API_KEY
    secret: projects/demo/secrets/api-key
    availability:
      - RUNTIME
  - variable: API_URL
    value: https://override.example.com
"#,
        );

        let schema = load(app.path("apphosting.yaml")).unwrap();

        assert_eq!(schema.run_config.cpu, Some(2.0));
        assert_eq!(schema.run_config.memory_mib, Some(1024));
        assert_eq!(schema.run_config.concurrency, Some(80));
        assert_eq!(schema.run_config.max_instances, Some(10));
        assert_eq!(schema.run_config.min_instances, Some(0));

        assert_eq!(schema.env.len(), 3);
        assert_eq!(schema.env[0].variable, "API_URL");
        assert_eq!(
            schema.env[0].availability,
            vec![Availability::Build, Availability::Runtime]
        );
        assert_eq!(
            schema.env[1].source,
            EnvSource::Secret("projects/demo/secrets/api-key".to_string())
        );
        // duplicates are kept in order
        assert_eq!(schema.env[2].value(), Some("https://override.example.com"));
    }

    #[test]
    fn test_invalid_document_reports_path() {
        let app = TestApp::new().with_apphosting_yaml("runConfig:\n  cpu: 9\n");

        let err = load(app.path("apphosting.yaml")).unwrap_err();
        assert!(err.to_string().contains("apphosting.yaml"));
        assert_eq!(err.validation().and_then(|v| v.field()), Some("cpu"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let schema = parse_str("scripts:\n  buildCommand: npm run build\nenv: []\n").unwrap();
        assert!(schema.is_empty());
    }
}

mod run_config_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case("cpu: 1", "cpu")]
    #[case("cpu: 8", "cpu")]
    #[case("cpu: 2.5", "cpu")]
    #[case("memoryMiB: 512", "memoryMiB")]
    #[case("memoryMiB: 32768", "memoryMiB")]
    #[case("concurrency: 1", "concurrency")]
    #[case("concurrency: 1000", "concurrency")]
    #[case("maxInstances: 1", "maxInstances")]
    #[case("maxInstances: 100", "maxInstances")]
    #[case("minInstances: 0", "minInstances")]
    #[case("minInstances: 100", "minInstances")]
    fn test_bounds_accepted(#[case] field: &str, #[case] name: &str) {
        let doc = format!("runConfig:\n  {field}\n");
        let schema = parse_str(&doc).unwrap();
        let json = serde_json::to_value(schema.run_config).unwrap();
        let set: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(set, vec![name]);
    }

    #[rstest]
    #[case("cpu: 9", "cpu")]
    #[case("cpu: 0.5", "cpu")]
    #[case("cpu: 0", "cpu")]
    #[case("memoryMiB: 511", "memoryMiB")]
    #[case("memoryMiB: 32769", "memoryMiB")]
    #[case("concurrency: 0", "concurrency")]
    #[case("concurrency: 1001", "concurrency")]
    #[case("maxInstances: 0", "maxInstances")]
    #[case("maxInstances: 101", "maxInstances")]
    #[case("minInstances: -1", "minInstances")]
    #[case("minInstances: 101", "minInstances")]
    fn test_bounds_rejected(#[case] field: &str, #[case] name: &str) {
        let doc = format!("runConfig:\n  {field}\n");
        let err = parse_str(&doc).unwrap_err();
        assert_eq!(err.field(), Some(name), "{err}");
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let schema = parse_str("runConfig:\n  minInstances: 0\n").unwrap();
        assert_eq!(schema.run_config.min_instances, Some(0));
        assert_eq!(schema.run_config.max_instances, None);
        assert_eq!(schema.run_config.cpu, None);
    }

    #[test]
    fn test_fractional_integer_field_is_malformed() {
        let err = parse_str("runConfig:\n  memoryMiB: 1024.5\n").unwrap_err();
        assert!(matches!(err, ValidationError::Malformed { .. }), "{err:?}");
    }

    #[test]
    fn test_min_instances_message_uses_enforced_bounds() {
        let err = parse_str("runConfig:\n  minInstances: 101\n").unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"runConfig.minInstances field is not in valid range of [0, 100] (got 101)"
        );
    }

    #[test]
    fn test_run_config_checked_before_env() {
        let err = parse_str("env:\n  - variable: A\nrunConfig:\n  cpu: 9\n").unwrap_err();
        assert_eq!(err.field(), Some("cpu"), "{err}");
    }
}

mod env_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_and_secret_rejected() {
        let err = parse_str("env:\n  - variable: A\n    value: x\n    secret: y\n").unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"env variable 'A': both 'value' and 'secret' fields cannot be present"
        );
    }

    #[test]
    fn test_neither_value_nor_secret_rejected() {
        let err = parse_str("env:\n  - variable: A\n").unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingValueOrSecret {
                variable: "A".to_string()
            }
        );
    }

    #[test]
    fn test_build_availability_accepted() {
        let schema =
            parse_str("env:\n  - variable: A\n    value: x\n    availability: [BUILD]\n").unwrap();
        assert_eq!(schema.env[0].availability, vec![Availability::Build]);
        assert!(!schema.env[0].is_available(Availability::Runtime));
    }

    #[test]
    fn test_unknown_availability_rejected() {
        let err =
            parse_str("env:\n  - variable: A\n    value: x\n    availability: [STAGING]\n")
                .unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidAvailability {
                variable: "A".to_string(),
                value: "STAGING".to_string()
            }
        );
    }

    #[test]
    fn test_empty_availability_is_unrestricted() {
        let schema = parse_str("env:\n  - variable: A\n    secret: s\n    availability: []\n").unwrap();
        assert!(schema.env[0].is_available(Availability::Build));
        assert!(schema.env[0].is_available(Availability::Runtime));
    }

    #[test]
    fn test_first_invalid_env_entry_reported() {
        let err = parse_str(
            "env:\n  - variable: OK\n    value: x\n  - variable: FIRST\n  - variable: SECOND\n    value: x\n    secret: y\n",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingValueOrSecret {
                variable: "FIRST".to_string()
            }
        );
    }
}

mod serialization_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_shape() {
        let schema = parse_str(
            "runConfig:\n  minInstances: 0\nenv:\n  - variable: A\n    secret: s\n    availability: [BUILD]\n",
        )
        .unwrap();
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "runConfig": { "minInstances": 0 },
                "env": [{ "variable": "A", "secret": "s", "availability": ["BUILD"] }]
            })
        );
    }
}
