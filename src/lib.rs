//! Roadie - development chores runner for Python projects
//!
//! Roadie replaces the pair of shell scripts that grow next to every Python
//! codebase: it runs the test suite under a coverage harness (then produces
//! coverage and lint reports), sweeps generated artifacts out of the tree,
//! and maintains a generated version stamp derived from `git describe`.

pub mod config;
pub mod error;
pub mod project;
pub mod runner;
pub mod stamp;
pub mod sweep;

// Re-exports for convenience
pub use config::Config;
pub use error::{RoadieError, RoadieResult};
pub use runner::{run_captured, run_streamed, ToolCommand, ToolOutput};
pub use stamp::{ensure_stamp, BumpLevel, Stamp, StampReport, Version};
pub use sweep::{build_plan, execute_plan, ArtifactSet, SweepOutcome, SweepPlan};
