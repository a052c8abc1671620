//! Runtime parameters built from configuration

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use regen_fs::PathMatcher;

/// One generator's execution contract
#[derive(Debug, Clone, Default)]
pub struct GeneratorParam {
    /// Working directory, relative to the project root
    pub work_dir: PathBuf,
    /// Paths owned by this generator
    pub gen_paths: PathMatcher,
    /// Variables overlaid on the inherited environment
    pub environment: BTreeMap<String, String>,
}

impl GeneratorParam {
    pub fn new(work_dir: impl Into<PathBuf>, gen_paths: PathMatcher) -> Self {
        Self {
            work_dir: work_dir.into(),
            gen_paths,
            environment: BTreeMap::new(),
        }
    }

    /// The directory the generate command runs in.
    ///
    /// `work_dir` always resolves inside `root`: a leading root or prefix
    /// component is dropped rather than replacing `root`.
    pub fn resolve_work_dir(&self, root: &Path) -> PathBuf {
        let relative: PathBuf = self
            .work_dir
            .components()
            .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir))
            .collect();
        root.join(relative)
    }

    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.environment.insert(name.into(), value.into());
        self
    }
}

/// Every configured generator, keyed by name.
///
/// Names iterate in lexicographic order regardless of configuration order.
#[derive(Debug, Clone, Default)]
pub struct ProjectParam {
    pub generators: BTreeMap<String, GeneratorParam>,
}

impl ProjectParam {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generator(mut self, name: impl Into<String>, param: GeneratorParam) -> Self {
        self.generators.insert(name.into(), param);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Generator names in execution order.
    pub fn sorted_names(&self) -> impl Iterator<Item = &str> {
        self.generators.keys().map(String::as_str)
    }
}
