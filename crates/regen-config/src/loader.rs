//! Reading configuration files

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use regen_core::ProjectParam;

use crate::schema::ProjectConfig;
use crate::upgrade::upgrade_config;
use crate::{Error, Result};

/// Load, upgrade and interpret the configuration at `path`.
///
/// A missing file means there is nothing to run and yields an empty
/// [`ProjectParam`].
pub fn load_project_param(path: &Path) -> Result<ProjectParam> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "configuration file not found, no generators to run");
            return Ok(ProjectParam::default());
        }
        Err(source) => {
            return Err(Error::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let upgraded = upgrade_config(&bytes)?;
    let config = ProjectConfig::from_yaml(&upgraded)?;
    tracing::debug!(
        path = %path.display(),
        generators = config.generators.len(),
        "loaded configuration"
    );
    config.to_param()
}

/// Result of upgrading a configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeOutcome {
    /// The document in the current schema
    pub upgraded: Vec<u8>,
    /// Whether the upgraded document differs from what was on disk
    pub changed: bool,
}

/// Upgrade the configuration file at `path`.
///
/// With `in_place`, a changed document is written back atomically;
/// unchanged files are never rewritten.
pub fn upgrade_config_file(path: &Path, in_place: bool) -> Result<UpgradeOutcome> {
    let original = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let upgraded = upgrade_config(&original)?;
    let changed = upgraded != original;

    if in_place && changed {
        regen_fs::io::write_atomic(path, &upgraded)?;
        tracing::info!(path = %path.display(), "upgraded configuration");
    }
    Ok(UpgradeOutcome { upgraded, changed })
}
