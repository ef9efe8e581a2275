//! Stamp file persistence
//!
//! The stamp is a two-key TOML file:
//!
//! ```toml
//! version = "1.12.4"
//! stamped = "2026-08-23T09:14:00Z"
//! ```
//!
//! Writes go through a sidecar lock plus a tempfile rename, so concurrent
//! invocations serialize and a crash never leaves a half-written stamp.

use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{RoadieError, RoadieResult};

use super::version::Version;

/// A generated version stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    pub version: Version,
    pub stamped: DateTime<Utc>,
}

/// On-disk representation.
#[derive(Debug, Serialize, Deserialize)]
struct TomlStamp {
    version: String,
    stamped: DateTime<Utc>,
}

fn to_toml(stamp: &Stamp) -> TomlStamp {
    TomlStamp {
        version: stamp.version.to_string(),
        stamped: stamp.stamped,
    }
}

/// Read the stamp at `path`. A missing file is `None`; an unreadable or
/// unparseable one is an error.
pub fn load_stamp(path: &Path) -> RoadieResult<Option<Stamp>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let raw: TomlStamp = toml::from_str(&content).map_err(|e| RoadieError::StampParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let version = raw
        .version
        .parse()
        .map_err(|_| RoadieError::StampParse {
            path: path.to_path_buf(),
            message: format!("bad version '{}'", raw.version),
        })?;

    Ok(Some(Stamp {
        version,
        stamped: raw.stamped,
    }))
}

/// Write the stamp atomically under an exclusive lock.
pub fn write_stamp(path: &Path, stamp: &Stamp) -> RoadieResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let lock_path = lock_path(path);
    let lock_file = fs::File::create(&lock_path)?;
    lock_file.lock_exclusive()?;

    let result = write_to_disk(path, stamp);

    let _ = FileExt::unlock(&lock_file);
    let _ = fs::remove_file(&lock_path);
    result
}

fn write_to_disk(path: &Path, stamp: &Stamp) -> RoadieResult<()> {
    let content = toml::to_string_pretty(&to_toml(stamp)).map_err(|e| RoadieError::StampParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| RoadieError::Io(e.error))?;
    Ok(())
}

fn lock_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".lock");
    path.with_file_name(name)
}
