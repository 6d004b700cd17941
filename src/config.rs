//! Transpiler invocation configuration.

use std::path::{Path, PathBuf};

/// File extension of C-Next sources (matched case-sensitively).
pub const SOURCE_EXTENSION: &str = "cnx";

/// Conventional name of the transpiler executable.
pub const DEFAULT_TOOL: &str = "cnext";

/// Fixed argument list for one transpiler invocation: where to find sources,
/// where headers are resolved from, and where generated C sources and headers
/// land. The transpiler performs its own file discovery under the source
/// directory, so there are no per-file arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct TranspileConfig {
    /// Directory scanned recursively for `.cnx` sources.
    pub source_dir: PathBuf,

    /// Include-path directory passed to the transpiler.
    pub include_dir: PathBuf,

    /// Directory receiving generated C sources.
    pub output_dir: PathBuf,

    /// Directory receiving generated headers.
    pub header_out_dir: PathBuf,

    /// Transpiler executable, resolved via the platform PATH search.
    pub tool: String,
}

impl Default for TranspileConfig {
    /// The conventional C-Next project layout: sources and generated C in
    /// `src`, headers resolved from and generated into `include`.
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src"),
            include_dir: PathBuf::from("include"),
            output_dir: PathBuf::from("src"),
            header_out_dir: PathBuf::from("include"),
            tool: DEFAULT_TOOL.to_string(),
        }
    }
}

impl TranspileConfig {
    /// Resolve all relative directories against `root`.
    ///
    /// Absolute directories are left untouched, matching the usual
    /// working-directory override semantics.
    #[must_use]
    pub fn rooted_at(self, root: &Path) -> Self {
        Self {
            source_dir: root.join(self.source_dir),
            include_dir: root.join(self.include_dir),
            output_dir: root.join(self.output_dir),
            header_out_dir: root.join(self.header_out_dir),
            tool: self.tool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_conventional_layout() {
        let config = TranspileConfig::default();
        assert_eq!(config.source_dir, PathBuf::from("src"));
        assert_eq!(config.include_dir, PathBuf::from("include"));
        assert_eq!(config.output_dir, PathBuf::from("src"));
        assert_eq!(config.header_out_dir, PathBuf::from("include"));
        assert_eq!(config.tool, "cnext");
    }

    #[test]
    fn test_rooted_at_joins_relative_dirs() {
        let config = TranspileConfig::default().rooted_at(Path::new("/project"));
        assert_eq!(config.source_dir, PathBuf::from("/project/src"));
        assert_eq!(config.include_dir, PathBuf::from("/project/include"));
        assert_eq!(config.output_dir, PathBuf::from("/project/src"));
        assert_eq!(config.header_out_dir, PathBuf::from("/project/include"));
    }

    #[test]
    fn test_rooted_at_keeps_absolute_dirs() {
        let config = TranspileConfig {
            source_dir: PathBuf::from("/elsewhere/src"),
            ..TranspileConfig::default()
        }
        .rooted_at(Path::new("/project"));
        // Path::join replaces the base when the argument is absolute
        assert_eq!(config.source_dir, PathBuf::from("/elsewhere/src"));
        assert_eq!(config.include_dir, PathBuf::from("/project/include"));
    }
}
