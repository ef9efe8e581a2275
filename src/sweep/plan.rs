//! Artifact scanning

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RoadieResult;

use super::patterns::ArtifactSet;

/// Everything a sweep would remove, split by removal strategy.
///
/// Paths are relative to the project root, in sorted walk order so output
/// and tests are deterministic.
#[derive(Debug, Clone, Default)]
pub struct SweepPlan {
    pub dirs: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl SweepPlan {
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dirs.len() + self.files.len()
    }
}

/// Walk the tree under `root` collecting artifacts.
///
/// Matched directories are recorded and not descended into. `.git` is
/// never entered. Unreadable subdirectories are skipped; only a root that
/// cannot be read at all is an error.
pub fn build_plan(root: &Path, set: &ArtifactSet) -> RoadieResult<SweepPlan> {
    let mut plan = SweepPlan::default();
    walk(root, root, set, &mut plan)?;
    Ok(plan)
}

fn walk(root: &Path, dir: &Path, set: &ArtifactSet, plan: &mut SweepPlan) -> RoadieResult<()> {
    let mut entries: Vec<fs::DirEntry> = match fs::read_dir(dir) {
        Ok(read) => read.filter_map(|e| e.ok()).collect(),
        Err(e) => {
            if dir == root {
                return Err(e.into());
            }
            return Ok(());
        }
    };
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let rel = match path.strip_prefix(root) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(_) => continue,
        };

        if file_type.is_dir() {
            if entry.file_name() == ".git" {
                continue;
            }
            if set.matches_dir(rel) {
                plan.dirs.push(rel.to_path_buf());
            } else {
                walk(root, &path, set, plan)?;
            }
        } else if set.matches_file(rel) {
            // Symlinks land here too; removal unlinks without following.
            plan.files.push(rel.to_path_buf());
        }
    }

    Ok(())
}
