//! Command handlers for the roadie binary.
//!
//! Each handler resolves the project root, loads configuration, builds a
//! [`UiContext`], and returns the process exit code. Errors that bubble out
//! of a handler are printed by `main` and exit with code 2.

mod clean;
mod version;

pub use clean::cmd_clean;
pub use test::cmd_test;
pub use version::cmd_version;

use std::path::{Path, PathBuf};

use anyhow::Result;
use roadie::config::{Config, ConfigWarning};
use roadie::project::resolve_root;

use crate::ui::context::UiContext;

pub(crate) struct CommandContext {
    pub root: PathBuf,
    pub config: Config,
    pub ui: UiContext,
}

/// Shared setup for every subcommand: root discovery, config load, and
/// warning output. Config warnings go to stderr so they survive `--json`
/// and `--quiet`.
pub(crate) fn prepare(
    project: Option<&Path>,
    json: bool,
    verbose: u8,
    quiet: bool,
) -> Result<CommandContext> {
    let root = resolve_root(project)?;
    let (config, warnings) = Config::load_for_root(&root)?;
    print_config_warnings(&warnings);

    Ok(CommandContext {
        root,
        config,
        ui: UiContext::new(json, verbose, quiet),
    })
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match &warning.suggestion {
            Some(suggestion) => eprintln!(
                "warning: unknown config key '{}' in {} (did you mean '{}'?)",
                warning.key, location, suggestion
            ),
            None => eprintln!(
                "warning: unknown config key '{}' in {}",
                warning.key, location
            ),
        }
    }
}
