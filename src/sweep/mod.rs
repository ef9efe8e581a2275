//! Artifact sweep for `roadie clean`
//!
//! Three stages: compile the pattern set ([`ArtifactSet`]), scan the tree
//! into a [`SweepPlan`], then remove ([`execute_plan`]). The split keeps
//! dry-run and the confirmation prompt on the cheap side of any deletion.

mod execute;
mod patterns;
mod plan;

pub use execute::{execute_plan, SweepFailure, SweepOutcome};
pub use patterns::{ArtifactSet, DEFAULT_PATTERNS};
pub use plan::{build_plan, SweepPlan};
