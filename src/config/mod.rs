//! Configuration module for Roadie
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ROADIE_*)
//! 3. Project config (roadie.toml at the project root)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_with_warnings, with_env_overrides, ConfigWarning};
pub use types::{CleanConfig, Config, TestConfig, VersionConfig};
