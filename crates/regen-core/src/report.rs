//! Aggregated verification report

use std::collections::BTreeMap;
use std::fmt;

use regen_fs::GeneratorDiff;

/// Non-empty per-generator diffs keyed by generator name.
///
/// Renders as the human-readable verification summary: a header listing
/// the generators that differed, then each generator's changed paths
/// indented beneath its name. No trailing newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectReport {
    diffs: BTreeMap<String, GeneratorDiff>,
}

impl ProjectReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generator's diff. Empty diffs are not recorded.
    pub fn record(&mut self, generator: impl Into<String>, diff: GeneratorDiff) {
        if !diff.is_empty() {
            self.diffs.insert(generator.into(), diff);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diffs.len()
    }

    pub fn get(&self, generator: &str) -> Option<&GeneratorDiff> {
        self.diffs.get(generator)
    }

    /// Names of generators whose outputs changed, sorted.
    pub fn generators(&self) -> impl Iterator<Item = &str> {
        self.diffs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GeneratorDiff)> {
        self.diffs.iter().map(|(name, diff)| (name.as_str(), diff))
    }
}

impl fmt::Display for ProjectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.generators().collect();
        write!(
            f,
            "Generators produced output that differed from what already exists: [{}]",
            names.join(", ")
        )?;
        for (name, diff) in self.iter() {
            write!(f, "\n  {name}:")?;
            for (path, entry) in diff.iter() {
                write!(f, "\n    {path}: {entry}")?;
            }
        }
        Ok(())
    }
}
