//! Artifact pattern matching
//!
//! Patterns use gitignore syntax with one sharpening: a trailing `/` marks
//! a directory pattern and anything else a file pattern, and the two kinds
//! never cross. A regular file named `build` survives a `build/` pattern,
//! and a directory named `x.log` survives `*.log`.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::config::CleanConfig;
use crate::error::{RoadieError, RoadieResult};

/// Built-in artifact set for Python projects.
///
/// Directory patterns are removed recursively wherever they appear; file
/// patterns are removed as single files. `coverage.log` and `lint.log`
/// fall under `*.log`.
pub const DEFAULT_PATTERNS: &[&str] = &[
    "__pycache__/",
    "build/",
    "dist/",
    "*.egg-info/",
    ".pytest_cache/",
    "htmlcov/",
    ".coverage",
    ".coverage.*",
    "*.log",
];

/// Compiled artifact matcher for one project root.
pub struct ArtifactSet {
    dirs: Gitignore,
    files: Gitignore,
    patterns: Vec<String>,
}

impl ArtifactSet {
    /// Compile an explicit pattern list.
    pub fn from_patterns(root: &Path, patterns: &[String]) -> RoadieResult<Self> {
        let mut dir_builder = GitignoreBuilder::new(root);
        let mut file_builder = GitignoreBuilder::new(root);

        for pattern in patterns {
            let builder = if pattern.ends_with('/') {
                &mut dir_builder
            } else {
                &mut file_builder
            };
            builder
                .add_line(None, pattern)
                .map_err(|e| RoadieError::Pattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
        }

        Ok(Self {
            dirs: build_set(dir_builder, patterns)?,
            files: build_set(file_builder, patterns)?,
            patterns: patterns.to_vec(),
        })
    }

    /// Build the effective set for a sweep: configured patterns (or the
    /// built-in defaults), plus `extra`, plus the version stamp rooted at
    /// the project root so a like-named file elsewhere is left alone.
    pub fn for_config(root: &Path, clean: &CleanConfig, stamp_file: &str) -> RoadieResult<Self> {
        let mut patterns: Vec<String> = match &clean.patterns {
            Some(list) => list.clone(),
            None => DEFAULT_PATTERNS.iter().map(|s| s.to_string()).collect(),
        };
        patterns.extend(clean.extra.iter().cloned());

        if !stamp_file.is_empty() {
            patterns.push(format!("/{}", stamp_file.trim_start_matches('/')));
        }

        Self::from_patterns(root, &patterns)
    }

    /// Does a directory at `rel` (relative to the root) match?
    pub fn matches_dir(&self, rel: &Path) -> bool {
        self.dirs.matched(rel, true).is_ignore()
    }

    /// Does a non-directory at `rel` (relative to the root) match?
    pub fn matches_file(&self, rel: &Path) -> bool {
        self.files.matched(rel, false).is_ignore()
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

fn build_set(builder: GitignoreBuilder, patterns: &[String]) -> RoadieResult<Gitignore> {
    builder.build().map_err(|e| RoadieError::Pattern {
        pattern: patterns.join(", "),
        message: e.to_string(),
    })
}
