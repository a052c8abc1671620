//! End-to-end runs of the orchestrator against scratch projects.
//!
//! Generators are simulated with `sh -c` scripts so the tests do not need
//! a Go toolchain.
#![cfg(unix)]

use pretty_assertions::assert_eq;
use regen_core::{
    Error, GenerateCommand, GeneratorParam, Mode, Orchestrator, ProjectParam,
};
use regen_fs::PathMatcher;
use regen_test_utils::{TestProject, sha256_hex};

fn sh(script: &str) -> Orchestrator {
    Orchestrator::new(GenerateCommand::new("sh", ["-c", script]))
}

fn foo_project() -> ProjectParam {
    ProjectParam::new().with_generator(
        "foo",
        GeneratorParam::new("gen", PathMatcher::from_paths(&["gen/output.txt"]).unwrap()),
    )
}

#[test]
fn verify_reports_rewritten_output() {
    let project = TestProject::with_foo_generator();
    let mut out = Vec::new();

    let err = sh("printf foo-output > output.txt")
        .verify(project.root(), &foo_project(), &mut out)
        .unwrap_err();

    assert!(err.is_already_reported());
    assert_eq!(err.to_string(), "");
    let want = format!(
        "Generators produced output that differed from what already exists: [foo]\n  foo:\n    gen/output.txt: previously had checksum {}, now has checksum {}\n",
        sha256_hex("original"),
        sha256_hex("foo-output"),
    );
    assert_eq!(String::from_utf8(out).unwrap(), want);
}

#[test]
fn verify_succeeds_silently_when_unchanged() {
    let project = TestProject::with_foo_generator();
    let mut out = Vec::new();

    sh("printf original > output.txt")
        .verify(project.root(), &foo_project(), &mut out)
        .unwrap();

    assert!(out.is_empty());
}

#[test]
fn verify_reports_deleted_output() {
    let project = TestProject::with_foo_generator();
    let mut out = Vec::new();

    let err = sh("rm output.txt")
        .verify(project.root(), &foo_project(), &mut out)
        .unwrap_err();

    assert!(matches!(err, Error::VerificationFailed));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Generators produced output that differed from what already exists: [foo]\n  foo:\n    gen/output.txt: existed before, no longer exists\n"
    );
}

#[test]
fn verify_does_not_roll_back() {
    let project = TestProject::with_foo_generator();
    let mut out = Vec::new();

    let _ = sh("printf foo-output > output.txt").verify(project.root(), &foo_project(), &mut out);

    project.assert_file_contains("gen/output.txt", "foo-output");
}

#[test]
fn apply_keeps_changes_and_prints_no_report() {
    let project = TestProject::with_foo_generator();
    let mut out = Vec::new();

    sh("printf foo-output > output.txt")
        .run(project.root(), &foo_project(), &mut out)
        .unwrap();

    assert!(out.is_empty());
    project.assert_file_contains("gen/output.txt", "foo-output");
}

#[test]
fn generator_output_is_forwarded_in_write_order() {
    let project = TestProject::with_foo_generator();
    let mut out = Vec::new();

    sh("echo generating; echo warning >&2")
        .run_all(project.root(), &foo_project(), &mut out, Mode::Apply)
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "generating\nwarning\n");
}

#[test]
fn generators_run_in_name_order() {
    let project = TestProject::new();
    for dir in ["a", "b", "c"] {
        project.write_file(&format!("{dir}/.keep"), "");
    }
    let param = |dir: &str| GeneratorParam::new(dir, PathMatcher::default());
    let project_param = ProjectParam::new()
        .with_generator("charlie", param("c"))
        .with_generator("alpha", param("a"))
        .with_generator("bravo", param("b"));
    let mut out = Vec::new();

    sh("basename \"$(pwd)\"")
        .run(project.root(), &project_param, &mut out)
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "a\nb\nc\n");
}

#[test]
fn first_failure_stops_the_run() {
    let project = TestProject::new();
    project.write_file("a/.keep", "");
    project.write_file("b/.keep", "");
    let project_param = ProjectParam::new()
        .with_generator("alpha", GeneratorParam::new("a", PathMatcher::default()))
        .with_generator("bravo", GeneratorParam::new("b", PathMatcher::default()));
    let mut out = Vec::new();

    let err = sh("touch ran; [ \"$(basename \"$(pwd)\")\" != a ]")
        .run(project.root(), &project_param, &mut out)
        .unwrap_err();

    assert!(matches!(err, Error::GeneratorFailed { ref generator, .. } if generator == "alpha"));
    assert!(project.root().join("a/ran").exists());
    assert!(!project.root().join("b/ran").exists());
}

#[test]
fn report_lists_every_changed_generator() {
    let project = TestProject::new();
    project.write_file("one/out.txt", "original");
    project.write_file("two/out.txt", "original");
    let param = |dir: &str| {
        GeneratorParam::new(dir, PathMatcher::from_paths(&[format!("{dir}/out.txt")]).unwrap())
    };
    let project_param = ProjectParam::new()
        .with_generator("two", param("two"))
        .with_generator("one", param("one"));
    let mut out = Vec::new();

    let report = sh("printf foo-output > out.txt; printf new > extra.txt")
        .run_generators(project.root(), &project_param, &mut out)
        .unwrap();

    assert_eq!(report.generators().collect::<Vec<_>>(), vec!["one", "two"]);
    assert_eq!(report.get("one").map(|d| d.len()), Some(1));
}

#[test]
fn empty_project_is_a_no_op() {
    let project = TestProject::new();
    let mut out = Vec::new();

    sh("exit 1")
        .verify(project.root(), &ProjectParam::new(), &mut out)
        .unwrap();

    assert!(out.is_empty());
}
