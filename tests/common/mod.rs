//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Helper to get the compiled binary path
pub fn get_binary_path() -> PathBuf {
    // Get the directory where cargo places test binaries
    let mut path = env::current_exe().unwrap();
    path.pop(); // Remove test executable name

    // Check if we're in a 'deps' directory (integration tests)
    if path.ends_with("deps") {
        path.pop(); // Go up to debug or release
    }

    path.push("cnext-build");

    // If the binary doesn't exist yet, build it first
    if !path.exists() {
        let build_output = Command::new("cargo")
            .args(["build", "--bin", "cnext-build"])
            .output()
            .expect("Failed to build binary");

        assert!(
            build_output.status.success(),
            "Failed to build cnext-build binary: {}",
            String::from_utf8_lossy(&build_output.stderr)
        );
    }

    path
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Helper to create a source file (with parent directories) inside a project
pub fn create_source_file(project: &Path, relative: &str, content: &str) {
    let path = project.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Helper to install a fake transpiler script into `project/fake-bin` and
/// return that directory for PATH prepending (unix only)
#[cfg(unix)]
pub fn install_fake_tool(project: &Path, name: &str, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let bin_dir = project.join("fake-bin");
    fs::create_dir_all(&bin_dir).unwrap();
    let tool_path = bin_dir.join(name);
    fs::write(&tool_path, format!("#!/bin/sh\n{script}\n")).unwrap();
    fs::set_permissions(&tool_path, fs::Permissions::from_mode(0o755)).unwrap();
    bin_dir
}

/// Helper to create a Command for the binary with `bin_dir` prepended to PATH
#[cfg(unix)]
pub fn command_with_tool_path(binary: &PathBuf, bin_dir: &Path) -> Command {
    let path = env::var("PATH").unwrap_or_default();
    let mut cmd = Command::new(binary);
    cmd.env("PATH", format!("{}:{path}", bin_dir.display()));
    cmd
}
