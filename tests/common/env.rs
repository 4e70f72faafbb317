//! Test environment builder for isolated sourcedb-merger testing.
//!
//! Provides `TestEnv` - a temp root directory for manifests plus an
//! isolated config home, with helpers to run the CLI against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a sourcedb-merger CLI command
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
pub struct TestEnv {
    /// Root directory every manifest path is relative to
    pub root: TempDir,
    /// Stand-in for `$XDG_CONFIG_HOME` so user config never leaks in
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("Failed to create root dir"),
            config_home: tempfile::tempdir().expect("Failed to create config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_sourcedb-merger")),
        }
    }

    /// Environment pre-populated with `fixtures::STANDARD_FILES`
    pub fn standard() -> Self {
        Self::new().with_files(super::fixtures::STANDARD_FILES)
    }

    pub fn with_files(self, files: &[(&str, &str)]) -> Self {
        for (name, content) in files {
            self.write(name, content);
        }
        self
    }

    /// Write a file relative to the root, creating parent directories
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(path, content).expect("Failed to write fixture");
    }

    /// Get path relative to root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).expect("Failed to read output")
    }

    /// Run the CLI from the root directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the root directory with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env_remove("RUST_LOG")
            .env_remove("SOURCEDB_EXTENSIONS")
            .env_remove("SOURCEDB_CONFLICT_POLICY");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute sourcedb-merger");
        to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
