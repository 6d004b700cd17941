//! Candidate source file discovery.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collect regular files under `root` whose extension matches
/// `extension` exactly (case-sensitive).
///
/// Discovery is fresh on every call; nothing is cached between invocations.
/// Unreadable directory entries are skipped rather than treated as errors.
/// Order of the returned paths is unspecified.
#[must_use]
pub fn find_source_files(root: &Path, extension: &str) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == extension)
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}
