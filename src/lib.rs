//! # cnext-build
//!
//! A pre-build transpilation hook for C-Next projects. Before the native build
//! runs, it scans the source tree for `.cnx` files, invokes the external
//! `cnext` transpiler to generate C sources and headers, and stops the build
//! if transpilation fails.
//!
//! ## Usage
//!
//! - Standalone: `cnext-build` in the project root (exit 0 on success or
//!   nothing-to-do, exit 1 on any failure).
//! - Embedded: register the transpile pass with a [`hook::PreBuildHooks`]
//!   registry and let the host build system trigger it before its final
//!   build action.
//!
//! See README.md for more details and examples.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod hook;
pub mod orchestrator;
pub mod report;

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
