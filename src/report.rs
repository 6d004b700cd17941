//! Outcome reporting: summary filtering and human-readable or JSON output.
//!
//! Everything here is post-processing over text the orchestrator already
//! captured, so it stays unit-testable with canned strings.

use crate::cli::OutputFormatArg;
use crate::orchestrator::Outcome;
use serde::Serialize;

/// Line prefixes the transpiler uses for its summary output.
const SUMMARY_PREFIXES: [&str; 3] = ["Compiled", "Collected", "Generated"];

/// Prefix for status lines printed by this tool.
const STATUS_PREFIX: &str = "cnext";

/// Filter captured transpiler stdout down to its summary lines
/// (`Compiled ...`, `Collected ...`, `Generated ...`), dropping the
/// per-file noise.
#[must_use]
pub fn summary_lines(stdout: &str) -> Vec<&str> {
    stdout
        .lines()
        .filter(|line| SUMMARY_PREFIXES.iter().any(|prefix| line.starts_with(prefix)))
        .collect()
}

/// Machine-readable description of one transpile pass, for `--output-format
/// json` consumers.
#[derive(Debug, Serialize)]
pub struct OutcomeReport<'a> {
    /// Outcome classification: `configuration-error`, `no-op`, `success`,
    /// `tool-missing`, or `tool-failed`.
    pub status: &'static str,

    /// Overall success (no-op counts as success).
    pub success: bool,

    /// Missing source directory, for configuration errors.
    pub source_dir: Option<String>,

    /// Number of candidate files discovered, on success.
    pub files: Option<usize>,

    /// Filtered transpiler summary lines, on success.
    pub summary: Vec<&'a str>,

    /// The executable that could not be resolved, when the tool is missing.
    pub tool: Option<&'a str>,

    /// Child process exit code, on tool failure.
    pub exit_code: Option<i32>,

    /// Verbatim transpiler standard error, on tool failure.
    pub stderr: Option<&'a str>,
}

impl<'a> OutcomeReport<'a> {
    /// Build a report from a classified outcome.
    #[must_use]
    pub fn from_outcome(outcome: &'a Outcome) -> Self {
        let mut report = Self {
            status: "no-op",
            success: !outcome.is_failure(),
            source_dir: None,
            files: None,
            summary: Vec::new(),
            tool: None,
            exit_code: None,
            stderr: None,
        };

        match outcome {
            Outcome::ConfigurationError { source_dir } => {
                report.status = "configuration-error";
                report.source_dir = Some(source_dir.display().to_string());
            }
            Outcome::NoWork => {}
            Outcome::Success { file_count, stdout } => {
                report.status = "success";
                report.files = Some(*file_count);
                report.summary = summary_lines(stdout);
            }
            Outcome::ToolMissing { tool } => {
                report.status = "tool-missing";
                report.tool = Some(tool.as_str());
            }
            Outcome::ToolFailed { exit_code, stderr } => {
                report.status = "tool-failed";
                report.exit_code = *exit_code;
                report.stderr = Some(stderr.as_str());
            }
        }

        report
    }

    /// Format as JSON for programmatic consumption.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Print a classified outcome in the requested format.
///
/// Stream mode writes `cnext:`-prefixed status lines to stdout and
/// diagnostics to stderr; JSON mode writes a single document to stdout.
/// With `verbose`, success passes the transpiler's full stdout through
/// instead of the filtered summary.
pub fn print_outcome(outcome: &Outcome, format: OutputFormatArg, verbose: bool) {
    match format {
        OutputFormatArg::Stream => print_stream(outcome, verbose),
        OutputFormatArg::Json => println!("{}", OutcomeReport::from_outcome(outcome).to_json()),
    }
}

fn print_stream(outcome: &Outcome, verbose: bool) {
    match outcome {
        Outcome::ConfigurationError { source_dir } => {
            eprintln!(
                "{STATUS_PREFIX}: error: source directory '{}' not found",
                source_dir.display()
            );
        }
        Outcome::NoWork => {
            println!("{STATUS_PREFIX}: no .cnx files found, nothing to do");
        }
        Outcome::Success { file_count, stdout } => {
            if verbose {
                print!("{stdout}");
            } else {
                for line in summary_lines(stdout) {
                    println!("{STATUS_PREFIX}: {line}");
                }
            }
            println!("{STATUS_PREFIX}: transpilation complete ({file_count} file(s))");
        }
        Outcome::ToolMissing { tool } => {
            eprintln!("{STATUS_PREFIX}: error: '{tool}' not found on PATH");
            eprintln!("{STATUS_PREFIX}: install the C-Next transpiler: npm install -g c-next");
        }
        Outcome::ToolFailed { exit_code, stderr } => {
            match exit_code {
                Some(code) => {
                    eprintln!("{STATUS_PREFIX}: transpilation failed (exit code {code})");
                }
                None => eprintln!("{STATUS_PREFIX}: transpilation failed"),
            }
            // Verbatim, never summarized: diagnostic fidelity matters here
            eprint!("{stderr}");
        }
    }
}
