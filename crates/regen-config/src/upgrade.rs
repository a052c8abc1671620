//! Upgrading configuration documents to the current schema
//!
//! A lenient probe reads only the version markers; the document is then
//! parsed strictly against whichever schema the probe selected. Malformed
//! YAML fails the probe instead of being mistaken for a non-legacy
//! document.

use serde::Deserialize;

use crate::de::optional_scalar;
use crate::legacy::upgrade_legacy_config;
use crate::schema::{ProjectConfig, is_blank};
use crate::{Error, Result};

/// Version markers, ignoring everything else in the document
#[derive(Debug, Default, Deserialize)]
struct ConfigProbe {
    #[serde(default, deserialize_with = "optional_scalar")]
    version: Option<String>,

    #[serde(rename = "legacy-config", default)]
    legacy: bool,
}

impl ConfigProbe {
    fn read(bytes: &[u8]) -> Result<Self> {
        if is_blank(bytes) {
            return Ok(Self::default());
        }
        serde_yaml::from_slice(bytes).map_err(Error::Parse)
    }
}

/// Upgrade a configuration document to the current schema.
///
/// - legacy documents are rewritten without their marker;
/// - current documents (no version, `""` or `"0"`) are validated and
///   returned byte for byte;
/// - any other version is rejected.
pub fn upgrade_config(bytes: &[u8]) -> Result<Vec<u8>> {
    let probe = ConfigProbe::read(bytes)?;
    if probe.legacy {
        tracing::debug!("upgrading legacy configuration");
        return upgrade_legacy_config(bytes);
    }

    match probe.version.as_deref().unwrap_or("") {
        "" | "0" => {
            ProjectConfig::from_yaml(bytes)?;
            Ok(bytes.to_vec())
        }
        other => Err(Error::UnsupportedVersion {
            version: other.to_string(),
        }),
    }
}
