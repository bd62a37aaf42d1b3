use apphost_fs::{Error, NormalizedPath, io};
use assert_fs::prelude::*;

#[test]
fn test_read_text_existing_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("yarn.lock");
    file.write_str("# yarn lockfile v1\n").unwrap();

    let content = io::read_text(&NormalizedPath::new(file.path())).unwrap();
    assert_eq!(content, "# yarn lockfile v1\n");
}

#[test]
fn test_read_text_nonexistent_file() {
    let path = NormalizedPath::new("/nonexistent/file.txt");
    assert!(matches!(io::read_text(&path), Err(Error::Io { .. })));
}

#[test]
fn test_read_optional_text_missing_is_none() {
    let temp = assert_fs::TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.child("apphosting.yaml").path());

    assert!(io::read_optional_text(&path).unwrap().is_none());
}

#[test]
fn test_read_optional_text_present() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("apphosting.yaml");
    file.write_str("env: []\n").unwrap();

    let content = io::read_optional_text(&NormalizedPath::new(file.path())).unwrap();
    assert_eq!(content.as_deref(), Some("env: []\n"));
}

#[test]
fn test_read_optional_text_directory_is_error() {
    let temp = assert_fs::TempDir::new().unwrap();
    let dir = temp.child("apphosting.yaml");
    dir.create_dir_all().unwrap();

    let result = io::read_optional_text(&NormalizedPath::new(dir.path()));
    assert!(matches!(result, Err(Error::Io { .. })));
}
