//! Structured differences between two snapshots

use std::collections::BTreeMap;
use std::fmt;

use crate::Snapshot;

/// How a single tracked path changed between two snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffEntry {
    /// Present only in the later snapshot
    Appeared,
    /// Present only in the earlier snapshot
    Disappeared,
    FileBecameDirectory,
    DirectoryBecameFile,
    /// File content hash changed; both hashes are kept for diagnostics
    ContentChanged { before: String, after: String },
}

impl fmt::Display for DiffEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffEntry::Appeared => write!(f, "did not exist before, now exists"),
            DiffEntry::Disappeared => write!(f, "existed before, no longer exists"),
            DiffEntry::FileBecameDirectory => {
                write!(f, "was previously a file, is now a directory")
            }
            DiffEntry::DirectoryBecameFile => {
                write!(f, "was previously a directory, is now a file")
            }
            DiffEntry::ContentChanged { before, after } => write!(
                f,
                "previously had checksum {before}, now has checksum {after}"
            ),
        }
    }
}

/// Every changed path of one generator, in lexicographic path order.
///
/// Renders as one `path: description` line per entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorDiff {
    entries: BTreeMap<String, DiffEntry>,
}

impl GeneratorDiff {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, entry: DiffEntry) {
        self.entries.insert(path.into(), entry);
    }

    pub fn get(&self, path: &str) -> Option<&DiffEntry> {
        self.entries.get(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DiffEntry)> {
        self.entries.iter().map(|(path, entry)| (path.as_str(), entry))
    }
}

impl fmt::Display for GeneratorDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (path, entry)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{path}: {entry}")?;
        }
        Ok(())
    }
}

/// Compare a snapshot taken before a generator ran with one taken after.
///
/// The result is empty exactly when both snapshots agree on every path's
/// presence, type and (for files) checksum.
pub fn compare(before: &Snapshot, after: &Snapshot) -> GeneratorDiff {
    let mut diff = GeneratorDiff::new();

    for old in before.iter() {
        let Some(new) = after.get(&old.path) else {
            diff.insert(old.path.as_str(), DiffEntry::Disappeared);
            continue;
        };

        match (old.is_dir, new.is_dir) {
            (false, true) => diff.insert(old.path.as_str(), DiffEntry::FileBecameDirectory),
            (true, false) => diff.insert(old.path.as_str(), DiffEntry::DirectoryBecameFile),
            (true, true) => {}
            (false, false) => {
                if old.checksum != new.checksum {
                    diff.insert(
                        old.path.as_str(),
                        DiffEntry::ContentChanged {
                            before: old.checksum.clone().unwrap_or_default(),
                            after: new.checksum.clone().unwrap_or_default(),
                        },
                    );
                }
            }
        }
    }

    for new in after.iter() {
        if before.get(&new.path).is_none() {
            diff.insert(new.path.as_str(), DiffEntry::Appeared);
        }
    }

    diff
}
