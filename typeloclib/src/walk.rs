//! Directory traversal.
//!
//! Walks a tree top-down, pruning excluded directory names before
//! descending into them. Directory symlinks are not followed, and
//! traversal errors are skipped rather than aborting the walk.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Directory names skipped entirely, wherever they appear below the root.
pub const EXCLUDED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "dist",
    "build",
    "target",
    ".venv",
    "venv",
    "__pycache__",
    ".mypy_cache",
    ".pytest_cache",
    ".next",
    ".cache",
    "coverage",
    "artifacts",
    "logs",
];

/// Check if a directory name is on the exclusion list.
fn is_excluded_dir(name: &str) -> bool {
    EXCLUDED_DIRS.contains(&name)
}

/// Yield every file under `root`, lazily.
///
/// Directories named in [`EXCLUDED_DIRS`] are pruned before descent. The
/// root itself is always walked, even when its own name is on the list.
/// Other directory names, hidden or not, are descended into.
pub fn walk_files(root: impl AsRef<Path>) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            // Pruning applies to children only, never the root
            if entry.depth() == 0 {
                return true;
            }
            if entry.file_type().is_dir() {
                let name = entry.file_name().to_str().unwrap_or("");
                return !is_excluded_dir(name);
            }
            true
        })
        .filter_map(|entry| {
            let entry = entry.ok()?;
            if entry.path().is_file() {
                Some(entry.into_path())
            } else {
                None
            }
        })
}
