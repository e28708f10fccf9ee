//! High-level scan API.
//!
//! [`scan`] ties the pipeline together: validate the root, walk the
//! tree, classify each file, count its lines, and aggregate per-type
//! totals. Per-file failures are skipped; only an invalid root fails
//! the scan as a whole.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::classify::classify_file;
use crate::count::{count_file, read_first_line, LineMode};
use crate::error::TypelocError;
use crate::stats::ScanSummary;
use crate::walk::walk_files;
use crate::Result;

/// Options for a scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Which lines count toward the totals
    pub line_mode: LineMode,
}

impl ScanOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line counting mode.
    pub fn line_mode(mut self, mode: LineMode) -> Self {
        self.line_mode = mode;
        self
    }
}

/// Scan a directory tree and aggregate line counts by file type.
///
/// The root is resolved to a normalized absolute path first; an empty
/// path means the current directory. Scanning anything that is not a
/// directory fails with [`TypelocError::NotADirectory`]. Files that
/// cannot be read are skipped, shebang lines are only read for
/// executable files the name rules left undecided.
pub fn scan(root: impl AsRef<Path>, options: ScanOptions) -> Result<ScanSummary> {
    let root = root.as_ref();
    let root = if root.as_os_str().is_empty() {
        Path::new(".")
    } else {
        root
    };
    let root = normalize(&std::path::absolute(root)?);

    if !root.is_dir() {
        return Err(TypelocError::NotADirectory(root));
    }

    let mut summary = ScanSummary::new(root.clone());
    for path in walk_files(&root) {
        let executable = match fs::metadata(&path) {
            Ok(meta) => is_executable(&meta),
            Err(_) => continue,
        };
        let Some(key) = classify_file(&path, executable, || read_first_line(&path)) else {
            continue;
        };
        match count_file(&path, options.line_mode) {
            Ok(lines) => summary.add_file(key, lines),
            Err(_) => continue,
        }
    }

    Ok(summary)
}

/// Lexically resolve `.` and `..` components of an absolute path.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for part in path.components() {
        match part {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Check for any execute permission bit.
#[cfg(unix)]
fn is_executable(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;

    meta.permissions().mode() & 0o111 != 0
}

/// Execute bits do not exist off unix, so shebang detection is skipped.
#[cfg(not(unix))]
fn is_executable(_meta: &fs::Metadata) -> bool {
    false
}
