//! Version stamping for `roadie version`
//!
//! The stamp records the project's working version in a generated file the
//! sweep is allowed to delete. When the file is missing (or `--fresh` is
//! given) the version is derived from the last annotated git tag and bumped
//! one level, then written atomically.

mod describe;
mod store;
mod version;

pub use describe::{git_describe, parse_describe};
pub use store::{load_stamp, write_stamp, Stamp};
pub use version::{BumpLevel, Version};

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::config::VersionConfig;
use crate::error::RoadieResult;

/// What `ensure_stamp` found or produced.
#[derive(Debug, Clone)]
pub struct StampReport {
    pub stamp: Stamp,
    pub created: bool,
    pub path: PathBuf,
}

/// Make sure the stamp file exists, creating it from `git describe` when
/// it does not. An existing stamp is reported as-is unless `fresh` forces
/// regeneration. `bump_override` takes precedence over the configured
/// level.
pub fn ensure_stamp(
    root: &Path,
    config: &VersionConfig,
    bump_override: Option<BumpLevel>,
    fresh: bool,
) -> RoadieResult<StampReport> {
    let path = root.join(&config.file);

    if !fresh {
        if let Some(stamp) = load_stamp(&path)? {
            return Ok(StampReport {
                stamp,
                created: false,
                path,
            });
        }
    }

    let described = git_describe(root)?;
    let level = bump_override.unwrap_or(config.bump);
    let stamp = Stamp {
        version: described.bump(level),
        stamped: Utc::now(),
    };
    write_stamp(&path, &stamp)?;

    Ok(StampReport {
        stamp,
        created: true,
        path,
    })
}
