//! # cnext-build
//!
//! Pre-build transpilation hook for C-Next projects. Run it from the project
//! root before the native build: it finds `.cnx` sources, invokes the `cnext`
//! transpiler, and exits nonzero if transpilation fails so a broken
//! transpilation stops the build instead of silently building stale output.

/// Entry point for the CLI tool.
fn main() {
    cnext_build::cli::run_cli();
}
