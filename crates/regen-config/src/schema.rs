//! Current (v0) configuration schema
//!
//! ```yaml
//! generators:
//!   foo:
//!     go-generate-dir: gen
//!     gen-paths:
//!       paths:
//!         - gen/output.txt
//!     environment:
//!       GOOS: linux
//! ```
//!
//! Every struct rejects unknown fields. Maps are ordered so serializing a
//! config always produces keys in canonical order.

use std::collections::BTreeMap;

use regen_core::{GeneratorParam, ProjectParam};
use regen_fs::PathMatcher;
use serde::{Deserialize, Serialize};

use crate::de::{null_as_default, optional_scalar, scalar_map};
use crate::{Error, Result};

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Schema version marker; absent or `"0"` for this schema
    #[serde(
        default,
        deserialize_with = "optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub generators: BTreeMap<String, GeneratorConfig>,
}

/// One generator's configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory the generate command runs in, relative to the project root
    #[serde(rename = "go-generate-dir", default)]
    pub go_generate_dir: String,

    #[serde(
        rename = "gen-paths",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "GenPathsConfig::is_empty"
    )]
    pub gen_paths: GenPathsConfig,

    #[serde(
        default,
        deserialize_with = "scalar_map",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub environment: BTreeMap<String, String>,
}

/// Paths a generator owns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenPathsConfig {
    /// Regexes matched against individual path components
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub names: Vec<String>,

    /// Glob path patterns relative to the project root
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub paths: Vec<String>,
}

impl GenPathsConfig {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.paths.is_empty()
    }

    pub fn matcher(&self) -> regen_fs::Result<PathMatcher> {
        PathMatcher::new(self.paths.as_slice(), self.names.as_slice())
    }
}

impl GeneratorConfig {
    pub fn to_param(&self) -> regen_fs::Result<GeneratorParam> {
        Ok(GeneratorParam {
            work_dir: self.go_generate_dir.clone().into(),
            gen_paths: self.gen_paths.matcher()?,
            environment: self.environment.clone(),
        })
    }
}

impl ProjectConfig {
    /// Parse a document against this schema.
    ///
    /// Documents holding nothing but whitespace and comments are an empty
    /// configuration.
    pub fn from_yaml(bytes: &[u8]) -> Result<Self> {
        if is_blank(bytes) {
            return Ok(Self::default());
        }
        serde_yaml::from_slice(bytes).map_err(Error::InvalidCurrent)
    }

    /// Serialize in canonical form.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(Error::Serialize)
    }

    /// Build runtime parameters, compiling every generator's path patterns.
    pub fn to_param(&self) -> Result<ProjectParam> {
        let mut project = ProjectParam::new();
        for (name, generator) in &self.generators {
            let param = generator
                .to_param()
                .map_err(|source| Error::InvalidGenPaths {
                    generator: name.clone(),
                    source,
                })?;
            project = project.with_generator(name.as_str(), param);
        }
        Ok(project)
    }
}

/// True when a document has no content besides whitespace and comments.
pub(crate) fn is_blank(bytes: &[u8]) -> bool {
    String::from_utf8_lossy(bytes).lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}
