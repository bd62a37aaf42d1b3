//! End-to-end integration test for the build preparation flow
//!
//! This test exercises the path a Next.js build takes: config loading ->
//! declared version lookup -> installed version resolution -> adaptor request.

use apphost_fs::{AppFile, NormalizedPath};
use apphost_nodejs::{
    AdaptorRequest, NEXT_JS, PackageJson, VersionSource, build_script_command, resolve,
};
use apphost_schema::{Availability, ValidationError};
use apphost_test_utils::TestApp;
use pretty_assertions::assert_eq;
use rstest::rstest;

const APPHOSTING_YAML: &str = r#"
runConfig:
  cpu: 1
  memoryMiB: 1024
  concurrency: 80
  maxInstances: 10
  minInstances: 0
env:
  - variable: NEXT_PUBLIC_STAGE
    value: production
  - variable: API_TOKEN
    secret: api-token
    availability:
      - RUNTIME
  - variable: BUILD_FLAG
    value: "1"
    availability:
      - BUILD
"#;

fn root(app: &TestApp) -> NormalizedPath {
    NormalizedPath::new(app.root())
}

/// Mirrors what the build orchestrator does before invoking the adaptor.
fn prepare(app: &TestApp) -> (String, AdaptorRequest) {
    let root = root(app);
    let declared = PackageJson::load(&root)
        .unwrap()
        .declared_version(NEXT_JS)
        .unwrap_or_default()
        .to_string();
    let installed = resolve(&root, NEXT_JS, &declared).version;
    let request = AdaptorRequest::for_nextjs(&installed);
    (installed, request)
}

#[test]
fn test_full_build_preparation() {
    let app = TestApp::new()
        .with_apphosting_yaml(APPHOSTING_YAML)
        .with_package_json(&[("next", "^14.0.0"), ("react", "^18.2.0")])
        .with_pnpm_lock(&[("next", "14.2.3(react@18.2.0)"), ("react", "18.2.0")]);

    let schema = apphost_schema::load(app.path("apphosting.yaml")).unwrap();
    assert_eq!(schema.run_config.min_instances, Some(0));
    assert_eq!(schema.run_config.max_instances, Some(10));

    let build_env: Vec<_> = schema
        .env_for(Availability::Build)
        .map(|var| var.variable.as_str())
        .collect();
    assert_eq!(build_env, vec!["NEXT_PUBLIC_STAGE", "BUILD_FLAG"]);

    let runtime_secrets: Vec<_> = schema
        .env_for(Availability::Runtime)
        .filter_map(|var| var.secret())
        .collect();
    assert_eq!(runtime_secrets, vec!["api-token"]);

    let (installed, request) = prepare(&app);
    assert_eq!(installed, "14.2.3");
    assert_eq!(request.version(), "14.2");
    assert_eq!(request.package_spec(), "@apphosting/adapter-nextjs@14.2");
    assert!(request.is_cached(Some("14.2")));
}

#[test]
fn test_app_without_config_or_lockfile() {
    let app = TestApp::new().with_package_json(&[("next", ">13.0.2 <14.0.15")]);

    let schema = apphost_schema::load(app.path("apphosting.yaml")).unwrap();
    assert!(schema.is_empty());

    let (installed, request) = prepare(&app);
    assert_eq!(installed, ">13.0.2 <14.0.15");
    assert_eq!(request.version(), ">=13.0 <=14.0");
}

#[test]
fn test_unparseable_declared_version_requests_latest() {
    let app = TestApp::new().with_package_json(&[("next", "canary")]);

    let (installed, request) = prepare(&app);
    assert_eq!(installed, "canary");
    assert_eq!(request.version(), "latest");
    assert_eq!(AdaptorRequest::fallback_spec(), "@apphosting/adapter-nextjs@latest");
}

#[test]
fn test_invalid_config_stops_build() {
    let app = TestApp::new().with_apphosting_yaml("runConfig:\n  cpu: 9\n");

    let err = apphost_schema::load(app.path("apphosting.yaml")).unwrap_err();
    assert!(matches!(
        err.validation(),
        Some(ValidationError::OutOfRange { field: "cpu", .. })
    ));
}

#[rstest]
#[case::pnpm_wins(true, true, true, "14.2.3", AppFile::PnpmLock)]
#[case::yarn_before_npm(false, true, true, "14.1.0", AppFile::YarnLock)]
#[case::npm_last(false, false, true, "14.0.4", AppFile::PackageLock)]
fn test_lockfile_priority(
    #[case] pnpm: bool,
    #[case] yarn: bool,
    #[case] npm: bool,
    #[case] expected: &str,
    #[case] source: AppFile,
) {
    let mut app = TestApp::new().with_package_json(&[("next", "^14.0.0")]);
    if pnpm {
        app = app.with_pnpm_lock(&[("next", "14.2.3")]);
    }
    if yarn {
        app = app.with_yarn_lock(&[("next", "^14.0.0", "14.1.0")]);
    }
    if npm {
        app = app.with_package_lock(&[("next", "14.0.4")]);
    }

    let resolution = resolve(&root(&app), NEXT_JS, "^14.0.0");
    assert_eq!(resolution.version, expected);
    assert_eq!(resolution.source, VersionSource::Lockfile(source));
}

#[test]
fn test_shrinkwrap_before_package_lock() {
    let app = TestApp::new()
        .with_shrinkwrap(&[("next", "13.5.6")])
        .with_package_lock(&[("next", "14.0.4")]);

    let resolution = resolve(&root(&app), NEXT_JS, "^13.5.0");
    assert_eq!(resolution.version, "13.5.6");
    assert_eq!(resolution.source, VersionSource::Lockfile(AppFile::NpmShrinkwrap));
}

#[test]
fn test_corrupt_lockfile_is_skipped() {
    let app = TestApp::new()
        .with_file("pnpm-lock.yaml", "dependencies: [unterminated")
        .with_package_lock(&[("next", "14.0.4")]);

    let resolution = resolve(&root(&app), NEXT_JS, "^14.0.0");
    assert_eq!(resolution.version, "14.0.4");
}

#[test]
fn test_build_script_uses_adaptor_dir() {
    assert_eq!(
        build_script_command("/workspace/.apphosting/adaptor"),
        "npm exec --prefix /workspace/.apphosting/adaptor apphosting-adapter-nextjs-build"
    );
}
