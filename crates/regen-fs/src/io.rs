//! Atomic file writes with advisory locking

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result};

/// Replace `path` with `content` without exposing a half-written file.
///
/// The content goes to a locked sibling file that is synced and then
/// renamed over `path`. If any step fails the sibling is removed and
/// `path` is left as it was.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let staged = staging_path(path);
    let result = write_staged(&staged, path, content)
        .and_then(|()| fs::rename(&staged, path).map_err(|e| Error::io(path, e)));
    if result.is_err() {
        let _ = fs::remove_file(&staged);
    }
    result
}

/// `.<name>.<pid>.tmp` next to `path`, so the final rename never crosses
/// filesystems.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}

fn write_staged(staged: &Path, target: &Path, content: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(staged)
        .map_err(|e| Error::io(staged, e))?;

    // released when `file` is closed
    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;
    file.write_all(content).map_err(|e| Error::io(staged, e))?;
    file.sync_all().map_err(|e| Error::io(staged, e))
}
