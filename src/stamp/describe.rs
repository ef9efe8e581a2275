//! Version discovery via `git describe`

use std::path::Path;
use std::process::Command;

use crate::error::{RoadieError, RoadieResult};

use super::version::{component, Version};

/// Run `git describe` in `root` and parse the version it reports.
pub fn git_describe(root: &Path) -> RoadieResult<Version> {
    let output = Command::new("git")
        .arg("describe")
        .current_dir(root)
        .output()
        .map_err(|e| RoadieError::Describe {
            message: format!("cannot run git: {e}"),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = if stderr.trim().is_empty() {
            format!("exited with {}", output.status)
        } else {
            stderr.trim().to_string()
        };
        return Err(RoadieError::Describe { message });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_describe(&stdout)
}

/// Extract the leading `MAJOR.MINOR.PATCH` from describe output.
///
/// Accepts an optional `v` tag prefix and ignores whatever follows the
/// third component, so `v1.12.3-14-gdeadbeef` parses as `1.12.3`.
pub fn parse_describe(output: &str) -> RoadieResult<Version> {
    let trimmed = output.trim();
    let text = trimmed.strip_prefix('v').unwrap_or(trimmed);

    let end = text
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(text.len());
    let parts: Vec<&str> = text[..end].split('.').collect();

    if parts.len() < 3 {
        return Err(RoadieError::VersionParse {
            input: trimmed.to_string(),
        });
    }

    Ok(Version {
        major: component(parts[0], trimmed)?,
        minor: component(parts[1], trimmed)?,
        patch: component(parts[2], trimmed)?,
    })
}
