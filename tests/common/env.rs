//! Test environment builder for isolated roadie testing.
//!
//! Provides `TestEnv` - an isolated project tree in a temp directory, a
//! stub-tool directory that shadows `PATH`, and helpers to run the roadie
//! CLI with deterministic output (dumb terminal, no color, piped stdin).

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running a roadie CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
///
/// Provides:
/// - An isolated project directory (the command's working directory)
/// - A stub-tool directory prepended to `PATH`, so tests control what
///   `coverage`, `pylint`, or `git` do
/// - CLI command execution helpers
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory for stub executables, prepended to PATH
    pub stub_dir: TempDir,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// The project root with symlinks resolved, as roadie itself prints it.
    pub fn canonical_root(&self) -> PathBuf {
        std::fs::canonicalize(self.project_root.path()).expect("canonicalize project root")
    }

    /// Write a file into the project tree, creating parent directories
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Read a file from the project tree
    pub fn read_project_file(&self, relative_path: &str) -> String {
        let full_path = self.project_path(relative_path);
        std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    /// Create subdirectories in the project
    pub fn create_subdirectories(&self, dirs: &[&str]) {
        for dir in dirs {
            std::fs::create_dir_all(self.project_path(dir)).expect("Failed to create subdirectory");
        }
    }

    /// Install an executable `#!/bin/sh` stub that shadows a real tool.
    ///
    /// Stubs run with the project root as their working directory, so a
    /// script can record its invocation with e.g.
    /// `echo "report $@" >> tool_calls.txt`.
    #[cfg(unix)]
    pub fn stub_tool(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.stub_dir.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{script}\n")).expect("Failed to write stub");
        let mut perms = std::fs::metadata(&path)
            .expect("Failed to stat stub")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to chmod stub");
    }

    /// Run roadie in this environment from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    /// Run roadie from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_roadie"));
        cmd.current_dir(cwd)
            .args(args)
            .stdin(Stdio::null())
            .env("TERM", "dumb")
            .env("NO_COLOR", "1")
            .env_remove("ROADIE_SOURCE_PATH")
            .env_remove("ROADIE_SOURCE_ENV")
            .env_remove("ROADIE_VERSION_FILE")
            .env("PATH", self.stubbed_path());

        let output = cmd.output().expect("Failed to execute roadie");
        self.output_to_result(output)
    }

    /// `PATH` with the stub directory in front
    fn stubbed_path(&self) -> std::ffi::OsString {
        let mut paths = vec![self.stub_dir.path().to_path_buf()];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        std::env::join_paths(paths).expect("Failed to join PATH")
    }

    /// Convert Command output to TestResult
    fn output_to_result(&self, output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    config: Option<String>,
    files: Vec<(String, String)>,
    directories: Vec<String>,
}

impl TestEnvBuilder {
    /// Create a new builder. By default no `roadie.toml` is written, so
    /// tests exercise the built-in defaults unless they opt in.
    pub fn new() -> Self {
        Self {
            config: None,
            files: Vec::new(),
            directories: Vec::new(),
        }
    }

    /// Set roadie.toml content for the project
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config = Some(toml.to_string());
        self
    }

    /// Add a file to the project tree
    pub fn with_file(mut self, relative_path: &str, content: &str) -> Self {
        self.files
            .push((relative_path.to_string(), content.to_string()));
        self
    }

    /// Create directories in the project tree
    pub fn with_dirs(mut self, dirs: &[&str]) -> Self {
        self.directories.extend(dirs.iter().map(|s| s.to_string()));
        self
    }

    /// Build the TestEnv
    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project temp dir");
        let stub_dir = TempDir::new().expect("Failed to create stub temp dir");

        if let Some(config) = &self.config {
            std::fs::write(project_root.path().join("roadie.toml"), config)
                .expect("Failed to write roadie.toml");
        }

        for dir in &self.directories {
            std::fs::create_dir_all(project_root.path().join(dir))
                .expect("Failed to create directory");
        }

        for (relative_path, content) in &self.files {
            let full_path = project_root.path().join(relative_path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create parent directories");
            }
            std::fs::write(&full_path, content).expect("Failed to write file");
        }

        TestEnv {
            project_root,
            stub_dir,
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
