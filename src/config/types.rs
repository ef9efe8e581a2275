//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RoadieResult;
use crate::stamp::BumpLevel;

use super::loader::{self, ConfigWarning};

/// Top-level configuration loaded from `roadie.toml`.
///
/// Every key is optional; an absent file means built-in defaults. The
/// defaults assume the conventional `src/` + `tests/` Python layout.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub test: TestConfig,
    pub clean: CleanConfig,
    pub version: VersionConfig,
}

/// Configuration for the `test` pipeline.
///
/// Each step is a full argv; the first element is the program looked up on
/// `PATH`, the rest are its arguments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TestConfig {
    /// Suite step argv. Extra CLI args after `--` are appended to this.
    pub runner: Vec<String>,

    /// Coverage report step argv (stdout is teed to `coverage_log`).
    pub report: Vec<String>,

    /// HTML report step argv.
    pub html: Vec<String>,

    /// Lint step argv (stdout is teed to `lint_log`; its exit code becomes
    /// the process exit code).
    pub lint: Vec<String>,

    /// Value injected into the child environment so the interpreter finds
    /// the package under test without an install.
    pub source_path: String,

    /// Name of the environment variable that receives `source_path`.
    pub source_env: String,

    /// Log file (relative to the project root) for the coverage report.
    pub coverage_log: String,

    /// Log file (relative to the project root) for the lint output.
    pub lint_log: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            runner: argv(&["coverage", "run", "--source=src", "-m", "pytest", "tests"]),
            report: argv(&["coverage", "report", "-m"]),
            html: argv(&["coverage", "html"]),
            lint: argv(&["pylint", "src"]),
            source_path: "src".to_string(),
            source_env: "PYTHONPATH".to_string(),
            coverage_log: "coverage.log".to_string(),
            lint_log: "lint.log".to_string(),
        }
    }
}

/// Configuration for the `clean` sweep.
///
/// Patterns use gitignore syntax: a trailing `/` marks a directory pattern
/// (removed recursively), anything else is a file pattern (removed as a
/// single file), and a leading `/` roots the pattern at the project root.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CleanConfig {
    /// Replaces the built-in artifact set when present.
    pub patterns: Option<Vec<String>>,

    /// Appended to the (built-in or replaced) artifact set.
    pub extra: Vec<String>,
}

/// Configuration for the version stamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VersionConfig {
    /// Stamp file path, relative to the project root.
    pub file: String,

    /// Which component to bump when regenerating from `git describe`.
    pub bump: BumpLevel,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            file: "version.toml".to_string(),
            bump: BumpLevel::Patch,
        }
    }
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Load configuration from a specific file path.
    pub fn load(path: &Path) -> RoadieResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration from `roadie.toml` under `root`, falling back to
    /// defaults when the file is missing. Environment overrides apply in
    /// both cases. Unknown-key warnings are returned for the caller to
    /// print; a malformed file is an error.
    pub fn load_for_root(root: &Path) -> RoadieResult<(Self, Vec<ConfigWarning>)> {
        let path = root.join("roadie.toml");
        if !path.is_file() {
            return Ok((loader::with_env_overrides(Self::default()), Vec::new()));
        }
        let (config, warnings) = loader::load_with_warnings(&path)?;
        Ok((loader::with_env_overrides(config), warnings))
    }
}
