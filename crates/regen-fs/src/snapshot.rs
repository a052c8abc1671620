//! Point-in-time fingerprints of the paths a generator owns

use std::collections::BTreeMap;
use std::fs::{self, FileType};
use std::path::Path;

use walkdir::WalkDir;

use crate::checksum::compute_file_checksum;
use crate::diff::{GeneratorDiff, compare};
use crate::{Error, PathMatcher, Result};

/// One tracked filesystem entry.
///
/// Directories record their identity only; their content is covered by
/// whichever files beneath them the matcher also tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFingerprint {
    /// Path relative to the snapshot root, `/`-separated
    pub path: String,
    pub is_dir: bool,
    /// SHA-256 of the file content, `None` for directories
    pub checksum: Option<String>,
}

impl FileFingerprint {
    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
            checksum: None,
        }
    }

    pub fn file(path: impl Into<String>, checksum: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
            checksum: Some(checksum.into()),
        }
    }
}

/// Fingerprints of every matched path under a root, keyed by relative path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: BTreeMap<String, FileFingerprint>,
}

impl Snapshot {
    /// Walk `root` and fingerprint every entry whose relative path satisfies
    /// `matcher`. The root itself is never recorded and symlinks are not
    /// followed while walking.
    ///
    /// # Errors
    ///
    /// Any traversal or read failure aborts the whole snapshot.
    pub fn capture(root: &Path, matcher: &PathMatcher) -> Result<Self> {
        let mut snapshot = Self::default();
        if matcher.is_empty() {
            return Ok(snapshot);
        }

        for entry in WalkDir::new(root).min_depth(1).follow_links(false) {
            let entry = entry.map_err(|source| Error::Walk {
                root: root.to_path_buf(),
                source,
            })?;
            let Ok(rel) = entry.path().strip_prefix(root) else {
                continue;
            };
            let rel = to_slash(rel);
            if !matcher.matches(&rel) {
                continue;
            }
            let fingerprint = fingerprint(entry.path(), rel, entry.file_type())?;
            snapshot.insert(fingerprint);
        }

        tracing::debug!(
            root = %root.display(),
            entries = snapshot.len(),
            "captured snapshot"
        );
        Ok(snapshot)
    }

    pub fn insert(&mut self, fingerprint: FileFingerprint) {
        self.entries.insert(fingerprint.path.clone(), fingerprint);
    }

    pub fn get(&self, path: &str) -> Option<&FileFingerprint> {
        self.entries.get(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fingerprints in lexicographic path order.
    pub fn iter(&self) -> impl Iterator<Item = &FileFingerprint> {
        self.entries.values()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Diff this snapshot (taken before) against `after`.
    pub fn compare(&self, after: &Snapshot) -> GeneratorDiff {
        compare(self, after)
    }
}

/// Capture a snapshot of `root` restricted to `matcher`.
pub fn snapshot(root: &Path, matcher: &PathMatcher) -> Result<Snapshot> {
    Snapshot::capture(root, matcher)
}

fn fingerprint(path: &Path, rel: String, file_type: FileType) -> Result<FileFingerprint> {
    let is_dir = if file_type.is_symlink() {
        // a dangling link is an error, not an absent entry
        fs::metadata(path).map_err(|e| Error::io(path, e))?.is_dir()
    } else {
        file_type.is_dir()
    };

    if is_dir {
        Ok(FileFingerprint::directory(rel))
    } else {
        Ok(FileFingerprint::file(rel, compute_file_checksum(path)?))
    }
}

/// Join `rel`'s components with `/`. Separators are taken from the
/// platform's own path parsing, so a `\` inside a Unix file name stays part
/// of that name.
fn to_slash(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
