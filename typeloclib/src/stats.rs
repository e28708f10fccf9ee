//! Aggregated scan statistics.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// Line and file totals for one file type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    /// Total lines across all files of this type
    pub lines: u64,
    /// Number of files of this type
    pub files: u64,
}

impl TypeCount {
    /// Create a new zeroed counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file's line count into the totals.
    pub fn add_file(&mut self, lines: u64) {
        self.lines += lines;
        self.files += 1;
    }
}

/// One row of the summary report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeRow {
    /// File type key
    pub key: &'static str,
    /// Total lines for this type
    pub lines: u64,
    /// Number of files of this type
    pub files: u64,
}

/// Result of scanning a directory tree.
///
/// `total` always equals the sum over `by_type`; both are maintained
/// together by [`ScanSummary::add_file`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanSummary {
    /// Normalized absolute scan root
    pub root: PathBuf,
    /// Per-type totals, keyed by file type
    pub by_type: BTreeMap<&'static str, TypeCount>,
    /// Totals across all counted files
    pub total: TypeCount,
}

impl ScanSummary {
    /// Create an empty summary for `root`.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            by_type: BTreeMap::new(),
            total: TypeCount::new(),
        }
    }

    /// Record one counted file of type `key`.
    pub fn add_file(&mut self, key: &'static str, lines: u64) {
        self.by_type.entry(key).or_default().add_file(lines);
        self.total.add_file(lines);
    }

    /// True when no files were counted.
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }

    /// Report rows, sorted by descending line count, then by type key.
    pub fn rows(&self) -> Vec<TypeRow> {
        let mut rows: Vec<TypeRow> = self
            .by_type
            .iter()
            .map(|(&key, count)| TypeRow {
                key,
                lines: count.lines,
                files: count.files,
            })
            .collect();
        rows.sort_by(|a, b| b.lines.cmp(&a.lines).then_with(|| a.key.cmp(b.key)));
        rows
    }
}
