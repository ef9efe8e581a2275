use std::path::{Path, PathBuf};

/// Discover the project root directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `roadie.toml` (explicit configuration anchors the project)
/// - `.git/` or `.git` file (git repo root / worktree)
///
/// Falls back to `start` when no markers are found, which matches running
/// the chores from whatever directory you happen to be in.
pub fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join("roadie.toml").is_file() {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

/// Resolve the effective project root for a command invocation.
///
/// An explicit `--project` flag wins and is taken literally (no marker
/// walk); otherwise discovery starts at the current working directory.
pub fn resolve_root(explicit: Option<&Path>) -> std::io::Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir.to_path_buf()),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(discover_project_root(&cwd))
        }
    }
}
