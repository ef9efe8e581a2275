//! Artifact removal

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::plan::SweepPlan;

/// One path that could not be removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Result of executing a sweep plan.
#[derive(Debug, Clone, Default)]
pub struct SweepOutcome {
    pub removed_dirs: Vec<PathBuf>,
    pub removed_files: Vec<PathBuf>,
    pub failures: Vec<SweepFailure>,
}

impl SweepOutcome {
    pub fn removed_count(&self) -> usize {
        self.removed_dirs.len() + self.removed_files.len()
    }
}

/// Remove everything in the plan.
///
/// Individual failures are collected, never propagated; the sweep always
/// finishes the list. A path that vanished since scanning counts as
/// removed.
pub fn execute_plan(root: &Path, plan: &SweepPlan) -> SweepOutcome {
    let mut outcome = SweepOutcome::default();

    for rel in &plan.dirs {
        match fs::remove_dir_all(root.join(rel)) {
            Ok(()) => outcome.removed_dirs.push(rel.clone()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                outcome.removed_dirs.push(rel.clone())
            }
            Err(e) => outcome.failures.push(SweepFailure {
                path: rel.clone(),
                message: e.to_string(),
            }),
        }
    }

    for rel in &plan.files {
        match fs::remove_file(root.join(rel)) {
            Ok(()) => outcome.removed_files.push(rel.clone()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                outcome.removed_files.push(rel.clone())
            }
            Err(e) => outcome.failures.push(SweepFailure {
                path: rel.clone(),
                message: e.to_string(),
            }),
        }
    }

    outcome
}
