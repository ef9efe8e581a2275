use std::path::PathBuf;

use clap::{Parser, Subcommand};
use roadie::stamp::BumpLevel;

/// Roadie - development chores runner for Python projects
#[derive(Parser, Debug)]
#[command(name = "roadie")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Pass pytest arguments after '--', e.g. 'roadie test -- -k smoke'.\nConfiguration lives in roadie.toml at the project root; every key is optional."
)]
pub struct Cli {
    /// Project root (skips marker discovery)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output (warnings still go to stderr)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the test suite under coverage, then report and lint
    ///
    /// The suite runs first; if it fails, roadie exits 1 and no report is
    /// produced. Otherwise the coverage report and lint output are printed
    /// and teed to their logs, and roadie exits with the lint exit code.
    Test {
        /// Skip the HTML coverage report step
        #[arg(long)]
        no_html: bool,

        /// Skip the lint step
        #[arg(long)]
        no_lint: bool,

        /// Extra arguments appended to the suite runner
        #[arg(last = true, value_name = "ARGS")]
        args: Vec<String>,
    },

    /// Remove generated artifacts (caches, build output, coverage, logs)
    Clean {
        /// Show what would be removed without removing anything
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Ensure the generated version stamp exists
    ///
    /// An existing stamp is reported as-is. A missing one is derived from
    /// `git describe`, bumped one level, and written.
    Version {
        /// Bump level when regenerating (major, minor, patch)
        #[arg(long, value_name = "LEVEL")]
        bump: Option<BumpLevel>,

        /// Regenerate even if the stamp exists
        #[arg(long)]
        fresh: bool,
    },
}
