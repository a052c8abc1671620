//! Path predicates deciding which files a generator owns
//!
//! A [`PathMatcher`] combines two kinds of patterns and matches when any
//! of them does:
//!
//! - path patterns: `/`-separated globs compared component by component
//!   against the leading components of a relative path, so `gen/*.txt`
//!   matches `gen/a.txt` and everything beneath it;
//! - name patterns: regular expressions that must fully match at least one
//!   component of the relative path.

use globset::{GlobBuilder, GlobMatcher};
use regex::Regex;

use crate::{Error, Result};

/// A glob path pattern split into per-component matchers
#[derive(Debug, Clone)]
struct PathPattern {
    components: Vec<GlobMatcher>,
}

impl PathPattern {
    fn parse(pattern: &str) -> Result<Self> {
        let components = split_components(pattern)
            .map(|component| {
                GlobBuilder::new(component)
                    .literal_separator(true)
                    .build()
                    .map(|glob| glob.compile_matcher())
                    .map_err(|e| Error::invalid_pattern(pattern, e))
            })
            .collect::<Result<Vec<_>>>()?;

        if components.is_empty() {
            return Err(Error::invalid_pattern(pattern, "pattern has no path components"));
        }
        Ok(Self { components })
    }

    fn matches(&self, components: &[&str]) -> bool {
        components.len() >= self.components.len()
            && self
                .components
                .iter()
                .zip(components)
                .all(|(glob, component)| glob.is_match(component))
    }
}

/// Predicate over project-relative paths.
///
/// An empty matcher matches nothing.
#[derive(Debug, Clone, Default)]
pub struct PathMatcher {
    paths: Vec<PathPattern>,
    names: Vec<Regex>,
}

impl PathMatcher {
    /// Build a matcher from glob path patterns and name regexes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] for a malformed glob or regex.
    pub fn new<P, N>(paths: &[P], names: &[N]) -> Result<Self>
    where
        P: AsRef<str>,
        N: AsRef<str>,
    {
        let paths = paths
            .iter()
            .map(|p| PathPattern::parse(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let names = names
            .iter()
            .map(|n| {
                let n = n.as_ref();
                Regex::new(&format!("^(?:{n})$")).map_err(|e| Error::invalid_pattern(n, e))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { paths, names })
    }

    /// Build a matcher from glob path patterns only.
    pub fn from_paths<P: AsRef<str>>(paths: &[P]) -> Result<Self> {
        Self::new::<P, &str>(paths, &[])
    }

    /// True when no pattern is configured, so nothing can match.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.names.is_empty()
    }

    /// Test a relative, `/`-separated path.
    pub fn matches(&self, rel_path: &str) -> bool {
        let components: Vec<&str> = split_components(rel_path).collect();
        if components.is_empty() {
            return false;
        }
        self.paths.iter().any(|p| p.matches(&components))
            || self
                .names
                .iter()
                .any(|re| components.iter().any(|c| re.is_match(c)))
    }
}

fn split_components(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|c| !c.is_empty() && *c != ".")
}
