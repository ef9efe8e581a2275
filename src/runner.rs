//! External tool invocation
//!
//! Every pipeline step (suite, coverage report, HTML report, lint, git
//! describe) runs through this module. Commands always execute with the
//! project root as working directory; stdout handling depends on whether
//! the step streams to the user or is captured for a log.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{RoadieError, RoadieResult};

/// A full argv for one external tool invocation.
///
/// The first element is the program resolved on `PATH`, the rest are its
/// arguments. Construction rejects an empty argv so spawn sites never have
/// to re-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    argv: Vec<String>,
}

impl ToolCommand {
    pub fn new(argv: Vec<String>, step: &str) -> RoadieResult<Self> {
        if argv.is_empty() || argv[0].is_empty() {
            return Err(RoadieError::EmptyCommand {
                step: step.to_string(),
            });
        }
        Ok(Self { argv })
    }

    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    /// Append passthrough arguments (e.g. everything after `--`).
    pub fn with_extra_args(mut self, extra: &[String]) -> Self {
        self.argv.extend(extra.iter().cloned());
        self
    }

    /// One-line rendering for status output and logs.
    pub fn display(&self) -> String {
        self.argv.join(" ")
    }
}

/// Output of a captured run. `stdout` is lossily decoded; tools that emit
/// non-UTF-8 report text still get logged rather than failing the step.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub code: Option<i32>,
    pub stdout: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

fn base_command(cmd: &ToolCommand, cwd: &Path, envs: &[(&str, &str)]) -> Command {
    let mut command = Command::new(cmd.program());
    command.args(cmd.args()).current_dir(cwd);
    for (key, value) in envs {
        command.env(key, value);
    }
    command
}

fn spawn_error(cmd: &ToolCommand, err: std::io::Error) -> RoadieError {
    RoadieError::ToolSpawn {
        program: cmd.program().to_string(),
        message: err.to_string(),
    }
}

/// Run a tool with inherited stdio, streaming its output live.
///
/// With `quiet_stdout` the child's stdout goes to the null device so our
/// own stdout stays machine-readable; stderr is always inherited.
pub fn run_streamed(
    cmd: &ToolCommand,
    cwd: &Path,
    envs: &[(&str, &str)],
    quiet_stdout: bool,
) -> RoadieResult<Option<i32>> {
    let mut command = base_command(cmd, cwd, envs);
    if quiet_stdout {
        command.stdout(Stdio::null());
    }

    let status = command.status().map_err(|e| spawn_error(cmd, e))?;
    Ok(status.code())
}

/// Run a tool capturing stdout, with stderr still inherited.
pub fn run_captured(
    cmd: &ToolCommand,
    cwd: &Path,
    envs: &[(&str, &str)],
) -> RoadieResult<ToolOutput> {
    let output = base_command(cmd, cwd, envs)
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| spawn_error(cmd, e))?;

    Ok(ToolOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
    })
}
