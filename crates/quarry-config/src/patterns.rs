//! Compiled include/exclude glob patterns for configured sources.

use std::{collections::HashMap, path::Path};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::{ConfigError, Source};

/// Compiled patterns for one source.
#[derive(Debug)]
struct SourcePatterns {
    /// Files must match at least one of these.
    include: GlobSet,
    /// Files matching any of these are skipped.
    exclude: GlobSet,
}

/// Compiled include/exclude patterns, keyed by source name.
///
/// Compile once per indexing run; matching is cheap after that.
#[derive(Debug)]
pub struct CompiledPatterns {
    /// Per-source compiled glob sets.
    sources: HashMap<String, SourcePatterns>,
}

impl CompiledPatterns {
    /// Compiles the patterns of all sources.
    pub fn compile(sources: &[Source]) -> Result<Self, ConfigError> {
        let mut compiled = HashMap::with_capacity(sources.len());

        for source in sources {
            compiled.insert(
                source.name.clone(),
                SourcePatterns {
                    include: build_glob_set(&source.include)?,
                    exclude: build_glob_set(&source.exclude)?,
                },
            );
        }

        Ok(Self { sources: compiled })
    }

    /// Checks whether a path (relative to its source root) should be indexed.
    ///
    /// Returns false for unknown source names.
    pub fn matches(&self, source: &str, rel_path: &Path) -> bool {
        let Some(patterns) = self.sources.get(source) else {
            return false;
        };

        patterns.include.is_match(rel_path) && !patterns.exclude.is_match(rel_path)
    }
}

/// Compiles a list of glob patterns into a single set.
fn build_glob_set(patterns: &[String]) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|source| ConfigError::InvalidPattern {
            pattern: patterns.join(", "),
            source,
        })
}
