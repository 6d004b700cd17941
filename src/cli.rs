//! CLI module containing the main entry point logic.
//!
//! This module is separated from main.rs so the same logic stays reusable
//! and testable as a library call.

use crate::config::TranspileConfig;
use crate::{orchestrator, report};
use clap::Parser as ClapParser;
use std::path::PathBuf;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for the cnext-build tool.
#[derive(ClapParser)]
#[command(name = "cnext-build")]
#[command(version = PKG_VERSION)]
#[command(about = "Pre-build transpilation hook for C-Next projects", long_about = None)]
struct Cli {
    /// Project root to resolve directories against (defaults to the current directory)
    #[arg(long = "working-dir", value_name = "PATH")]
    working_dir: Option<PathBuf>,

    /// Directory scanned recursively for .cnx sources
    #[arg(long, value_name = "DIR", default_value = "src")]
    source_dir: PathBuf,

    /// Include-path directory passed to the transpiler
    #[arg(long, value_name = "DIR", default_value = "include")]
    include_dir: PathBuf,

    /// Directory receiving generated C sources
    #[arg(long, value_name = "DIR", default_value = "src")]
    output_dir: PathBuf,

    /// Directory receiving generated headers
    #[arg(long, value_name = "DIR", default_value = "include")]
    header_out_dir: PathBuf,

    /// Transpiler executable to invoke
    #[arg(long, value_name = "NAME", default_value = "cnext")]
    tool: String,

    /// Output format for the outcome report (stream, json)
    #[arg(long, value_name = "FORMAT", default_value = "stream")]
    output_format: OutputFormatArg,

    /// Pass through the transpiler's full output instead of the filtered summary
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for outcome reporting
#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum OutputFormatArg {
    /// Human-readable status lines (default)
    Stream,
    /// Machine-readable JSON document
    Json,
}

impl Cli {
    /// Build the transpiler configuration from the parsed arguments.
    fn config(&self) -> TranspileConfig {
        let config = TranspileConfig {
            source_dir: self.source_dir.clone(),
            include_dir: self.include_dir.clone(),
            output_dir: self.output_dir.clone(),
            header_out_dir: self.header_out_dir.clone(),
            tool: self.tool.clone(),
        };

        match &self.working_dir {
            Some(root) => config.rooted_at(root),
            None => config,
        }
    }
}

/// Main CLI logic: one discovery-and-transpile pass, outcome mapped to the
/// process exit status (0 for no-op/success, 1 for any failure).
pub fn run_cli() {
    let cli = Cli::parse();

    if let Some(ref root) = cli.working_dir
        && !root.is_dir()
    {
        crate::fatal_error(&format!(
            "Error: working directory '{}' not found",
            root.display()
        ));
    }

    let outcome = orchestrator::run(&cli.config());
    report::print_outcome(&outcome, cli.output_format, cli.verbose);
    std::process::exit(outcome.exit_code());
}
