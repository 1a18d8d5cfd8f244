//! Shared testing utilities for prexec CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `prexec` binary.
    ///
    /// The inherited environment is cleared so a CI runner's own variables
    /// cannot leak into completion. Only `PATH` and `HOME` are kept.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("prexec").expect("Failed to locate prexec binary");
        cmd.current_dir(self.work_dir()).env_clear().env("HOME", self.home());
        if let Some(path) = std::env::var_os("PATH") {
            cmd.env("PATH", path);
        }
        cmd
    }

    /// Write `.prexec.toml` into the work directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join(".prexec.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }
}
