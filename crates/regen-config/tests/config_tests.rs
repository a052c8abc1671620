//! Integration tests for loading and upgrading configuration files

use pretty_assertions::assert_eq;
use regen_config::{Error, load_project_param, upgrade_config_file};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const LEGACY: &str = r#"
legacy-config: true
generators:
  foo:
    go-generate-dir: gen
    gen-paths:
      paths:
        - "gen/output.txt"
"#;

const CURRENT: &str = r#"
generators:
  foo:
    go-generate-dir: gen
    gen-paths:
      paths:
        - "gen/output.txt"
    environment:
      # comment on environment variable
      GOOS: linux
"#;

fn write_config(temp: &TempDir, content: &str) -> PathBuf {
    let path = temp.path().join("generate.yml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn missing_file_loads_empty_project() {
    let temp = TempDir::new().unwrap();

    let project = load_project_param(&temp.path().join("generate.yml")).unwrap();

    assert!(project.is_empty());
}

#[test]
fn loads_current_config() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, CURRENT);

    let project = load_project_param(&path).unwrap();

    assert_eq!(project.sorted_names().collect::<Vec<_>>(), vec!["foo"]);
    let foo = &project.generators["foo"];
    assert_eq!(foo.work_dir, PathBuf::from("gen"));
    assert_eq!(foo.environment["GOOS"], "linux");
    assert!(foo.gen_paths.matches("gen/output.txt"));
}

#[test]
fn loads_legacy_config() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, LEGACY);

    let project = load_project_param(&path).unwrap();

    assert!(project.generators["foo"].gen_paths.matches("gen/output.txt"));
}

#[test]
fn unsupported_version_fails_before_anything_runs() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "version: \"5\"\n");

    let err = load_project_param(&path).unwrap_err();

    assert!(matches!(err, Error::UnsupportedVersion { ref version } if version == "5"));
}

#[test]
fn unreadable_path_names_the_file() {
    let temp = TempDir::new().unwrap();
    // a directory cannot be read as a file
    let path = temp.path().join("generate.yml");
    fs::create_dir(&path).unwrap();

    let err = load_project_param(&path).unwrap_err();

    assert!(matches!(err, Error::Read { .. }));
    assert!(err.to_string().contains("generate.yml"));
}

#[test]
fn upgrade_in_place_rewrites_legacy_file() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, LEGACY);

    let outcome = upgrade_config_file(&path, true).unwrap();

    assert!(outcome.changed);
    let expected = "generators:\n  foo:\n    go-generate-dir: gen\n    gen-paths:\n      paths:\n      - gen/output.txt\n";
    assert_eq!(String::from_utf8(outcome.upgraded).unwrap(), expected);
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn upgrade_leaves_current_file_untouched() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, CURRENT);

    let outcome = upgrade_config_file(&path, true).unwrap();

    assert!(!outcome.changed);
    assert_eq!(fs::read_to_string(&path).unwrap(), CURRENT);
}

#[test]
fn upgrade_without_in_place_does_not_write() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, LEGACY);

    let outcome = upgrade_config_file(&path, false).unwrap();

    assert!(outcome.changed);
    assert_eq!(fs::read_to_string(&path).unwrap(), LEGACY);
}

#[test]
fn upgrade_of_missing_file_is_an_error() {
    let temp = TempDir::new().unwrap();

    let err = upgrade_config_file(&temp.path().join("absent.yml"), false).unwrap_err();

    assert!(matches!(err, Error::Read { .. }));
}
