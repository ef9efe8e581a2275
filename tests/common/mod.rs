//! Common test utilities for roadie CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Assertion macros: `assert_swept!`, `assert_output_contains!`, etc.

pub mod assertions;
pub mod env;

pub use assertions::*;
pub use env::*;
