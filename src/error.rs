//! Error types for Roadie
//!
//! Uses `thiserror` for library errors; the binary wraps these with
//! `anyhow` context at the edge.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Roadie operations
pub type RoadieResult<T> = Result<T, RoadieError>;

/// Main error type for Roadie operations
#[derive(Error, Debug)]
pub enum RoadieError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid config in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// An external tool could not be launched at all
    #[error("failed to launch '{program}': {message}")]
    ToolSpawn { program: String, message: String },

    /// A pipeline step was configured with an empty argv
    #[error("empty command for the '{step}' step")]
    EmptyCommand { step: String },

    /// `git describe` failed or produced no output
    #[error("git describe failed: {message}\nmake sure the repository has at least one annotated tag (git tag -a)")]
    Describe { message: String },

    /// A version string did not contain MAJOR.MINOR.PATCH
    #[error("cannot parse version from '{input}'")]
    VersionParse { input: String },

    /// The stamp file exists but is not readable as a stamp
    #[error("invalid version stamp in {path}: {message}")]
    StampParse { path: PathBuf, message: String },

    /// An artifact pattern was rejected by the matcher
    #[error("invalid clean pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
}
