//! [`TestProject`] builder for generator test scenarios.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Content used for the canonical `gen/output.txt` fixture.
pub const ORIGINAL_OUTPUT: &str = "original";

/// A temporary project root plus a private directory for fake tools.
///
/// # Example
///
/// ```rust,no_run
/// use regen_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write_file("gen/output.txt", "original");
/// project.install_fake_go("printf foo-output > output.txt");
/// project.assert_file_contains("gen/output.txt", "original");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
    bin_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty project root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
            bin_dir: TempDir::new().unwrap(),
        }
    }

    /// The single-generator layout most tests start from: `gen/output.txt`
    /// containing [`ORIGINAL_OUTPUT`] and a `generate.yml` declaring `foo`.
    pub fn with_foo_generator() -> Self {
        let project = Self::new();
        project.write_file("gen/output.txt", ORIGINAL_OUTPUT);
        project.write_file(
            "generate.yml",
            r#"
generators:
  foo:
    go-generate-dir: gen
    gen-paths:
      paths:
        - "gen/output.txt"
"#,
        );
        project
    }

    /// Return the project root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Return the directory holding fake executables.
    pub fn bin_dir(&self) -> &Path {
        self.bin_dir.path()
    }

    /// Write `content` to `rel` under the root, creating parent directories.
    pub fn write_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read `rel` under the root as text.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_file(&self, rel: &str) -> String {
        let path = self.root().join(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Install an executable named `go` into [`Self::bin_dir`] that ignores
    /// its arguments and runs `script` with `sh` in its working directory.
    #[cfg(unix)]
    pub fn install_fake_go(&self, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir().join("go");
        fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// A `PATH` value with [`Self::bin_dir`] ahead of the inherited entries.
    pub fn path_env(&self) -> OsString {
        let mut paths = vec![self.bin_dir().to_path_buf()];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        std::env::join_paths(paths).unwrap()
    }

    /// Assert that the file at `rel` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, rel: &str, content: &str) {
        let file_content = self.read_file(rel);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            rel,
            content,
            file_content
        );
    }
}

/// Known SHA-256 digests of fixture contents, so tests do not need a
/// hashing dependency of their own.
pub fn sha256_hex(content: &str) -> &'static str {
    match content {
        "original" => "0682c5f2076f099c34cfdd15a9e063849ed437a49677e6fcc5b4198c76575be5",
        "foo-output" => "380a300b764683667309818ff127a401c6ea6ab1959f386fe0f05505d660ba37",
        "" => "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        other => panic!("no known checksum for fixture content {other:?}"),
    }
}
