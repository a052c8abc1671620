//! Legacy configuration
//!
//! Legacy documents carry the current schema's fields plus a top-level
//! `legacy-config: true` marker. Upgrading strips the marker and writes the
//! remaining fields back out in canonical form.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::de::null_as_default;
use crate::schema::{GeneratorConfig, ProjectConfig};
use crate::{Error, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LegacyProjectConfig {
    #[serde(rename = "legacy-config")]
    #[allow(dead_code)] // only its presence matters once the probe has run
    legacy: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    generators: BTreeMap<String, GeneratorConfig>,
}

impl From<LegacyProjectConfig> for ProjectConfig {
    fn from(legacy: LegacyProjectConfig) -> Self {
        ProjectConfig {
            version: None,
            generators: legacy.generators,
        }
    }
}

/// Rewrite a legacy document as a current-schema document.
///
/// # Errors
///
/// Fails if the document has fields the legacy schema does not know.
pub fn upgrade_legacy_config(bytes: &[u8]) -> Result<Vec<u8>> {
    let legacy: LegacyProjectConfig =
        serde_yaml::from_slice(bytes).map_err(Error::InvalidLegacy)?;
    let upgraded = ProjectConfig::from(legacy).to_yaml()?;
    Ok(upgraded.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_marker_and_comments() {
        let legacy = r#"
legacy-config: true
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

        let upgraded = String::from_utf8(upgrade_legacy_config(legacy.as_bytes()).unwrap()).unwrap();

        assert_eq!(
            upgraded,
            "generators:\n  foo:\n    go-generate-dir: gen\n    gen-paths:\n      paths:\n      - gen/output.txt\n    environment:\n      GOOS: linux\n"
        );
    }

    #[test]
    fn legacy_version_field_is_unknown() {
        let err = upgrade_legacy_config(b"legacy-config: true\nversion: \"0\"\n").unwrap_err();
        assert!(matches!(err, Error::InvalidLegacy(_)));
    }
}
