//! The transpile pass: discovery, transpiler invocation, and outcome
//! classification.
//!
//! One call to [`run`] performs at most one child-process spawn, blocks until
//! the transpiler exits, and classifies the result. It writes no files itself
//! and never retries; generated output is entirely the transpiler's business.

use crate::config::{SOURCE_EXTENSION, TranspileConfig};
use crate::discovery;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;

/// Classification of a single transpile pass.
///
/// The variants are mutually exclusive and exhaustive for one invocation;
/// nothing here is persisted across runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The expected source directory does not exist. Nothing was spawned.
    ConfigurationError {
        /// The directory that was expected to exist.
        source_dir: PathBuf,
    },

    /// No matching sources were found. Nothing to do, not an error.
    NoWork,

    /// The transpiler ran and exited 0.
    Success {
        /// Number of candidate files discovered before the invocation.
        file_count: usize,
        /// Captured standard output, kept for summary filtering.
        stdout: String,
    },

    /// The transpiler executable could not be resolved on the search path.
    ToolMissing {
        /// The executable name that failed to resolve.
        tool: String,
    },

    /// The transpiler ran and exited nonzero.
    ToolFailed {
        /// Exit code of the child process (None if killed by signal).
        exit_code: Option<i32>,
        /// Captured standard error, surfaced verbatim to the user.
        stderr: String,
    },
}

impl Outcome {
    /// Whether this outcome must stop the build.
    ///
    /// `NoWork` is deliberately not a failure: a project with no `.cnx`
    /// files yet is a valid steady state.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Outcome::ConfigurationError { .. }
                | Outcome::ToolMissing { .. }
                | Outcome::ToolFailed { .. }
        )
    }

    /// Process exit status for standalone invocation: 0 for no-op/success,
    /// 1 for any failure classification.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(self.is_failure())
    }
}

/// Run one discovery-and-transpile pass.
///
/// Checks the source directory, enumerates candidate files, and invokes the
/// transpiler synchronously with the fixed four-directory argument list.
/// Re-running with unchanged inputs is safe and yields the same outcome
/// class; there is no cached state between calls.
#[must_use]
pub fn run(config: &TranspileConfig) -> Outcome {
    if !config.source_dir.is_dir() {
        return Outcome::ConfigurationError {
            source_dir: config.source_dir.clone(),
        };
    }

    let files = discovery::find_source_files(&config.source_dir, SOURCE_EXTENSION);
    if files.is_empty() {
        return Outcome::NoWork;
    }

    // Resolve before spawning so a missing tool gets an actionable message
    // instead of a raw OS error.
    if which::which(&config.tool).is_err() {
        return Outcome::ToolMissing {
            tool: config.tool.clone(),
        };
    }

    let result = Command::new(&config.tool)
        .arg(&config.source_dir)
        .arg("-I")
        .arg(&config.include_dir)
        .arg("-o")
        .arg(&config.output_dir)
        .arg("--header-out")
        .arg(&config.header_out_dir)
        .output();

    match result {
        Ok(output) => {
            if output.status.success() {
                Outcome::Success {
                    file_count: files.len(),
                    stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                }
            } else {
                Outcome::ToolFailed {
                    exit_code: output.status.code(),
                    stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                }
            }
        }
        // The tool vanished between the which() check and the spawn
        Err(e) if e.kind() == ErrorKind::NotFound => Outcome::ToolMissing {
            tool: config.tool.clone(),
        },
        Err(e) => Outcome::ToolFailed {
            exit_code: None,
            stderr: e.to_string(),
        },
    }
}
