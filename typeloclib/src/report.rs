//! Plain-text report rendering.
//!
//! The report is a fixed-width table: a header naming the scanned root,
//! one row per file type sorted by line count, and a grand total. The
//! root is labelled relative to the working directory, `.` when they
//! are the same.

use std::path::{Component, Path, PathBuf};

use crate::stats::ScanSummary;

/// Render the full report, trailing newline included.
pub fn render_report(summary: &ScanSummary, cwd: &Path) -> String {
    let mut out = String::new();

    let header = format!(
        "Lines of code by file type in {}",
        root_label(&summary.root, cwd)
    );
    let underline = "-".repeat(header.chars().count());
    out.push_str(&header);
    out.push('\n');
    out.push_str(&underline);
    out.push('\n');

    if summary.is_empty() {
        out.push_str("No code files found with current filters.\n");
        return out;
    }

    for row in summary.rows() {
        out.push_str(&format!(
            "{:<10}  {:>10} lines   ({:>5} files)\n",
            row.key, row.lines, row.files
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "TOTAL         {:>10} lines   ({:>5} files)\n",
        summary.total.lines, summary.total.files
    ));

    out
}

/// Label for the scanned root: `.` for the working directory itself,
/// otherwise the relative path from the working directory.
fn root_label(root: &Path, cwd: &Path) -> String {
    if root == cwd {
        return ".".to_string();
    }
    relative_to(root, cwd).display().to_string()
}

/// Lexical relative path from `base` to `path`; both must be absolute.
fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path_parts: Vec<Component> = path.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    let common = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    // Paths on different roots have no relative form
    if common == 0 {
        return path.to_path_buf();
    }

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for part in &path_parts[common..] {
        rel.push(part.as_os_str());
    }
    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    rel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_full_table() {
        let mut summary = ScanSummary::new(PathBuf::from("/work/project"));
        summary.add_file("py", 3);
        summary.add_file("js", 2);

        let report = render_report(&summary, Path::new("/work/project"));
        let expected = "\
Lines of code by file type in .
-------------------------------
py                   3 lines   (    1 files)
js                   2 lines   (    1 files)

TOTAL                  5 lines   (    2 files)
";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_report_sorts_ties_by_key() {
        let mut summary = ScanSummary::new(PathBuf::from("/work/project"));
        summary.add_file("py", 2);
        summary.add_file("js", 2);

        let report = render_report(&summary, Path::new("/work/project"));
        let js_at = report.find("\njs ").unwrap();
        let py_at = report.find("\npy ").unwrap();
        assert!(js_at < py_at);
    }

    #[test]
    fn test_report_empty_summary() {
        let summary = ScanSummary::new(PathBuf::from("/work/project"));

        let report = render_report(&summary, Path::new("/work"));
        let expected = "\
Lines of code by file type in project
-------------------------------------
No code files found with current filters.
";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_underline_matches_multibyte_label() {
        let summary = ScanSummary::new(PathBuf::from("/w/héllo"));

        let report = render_report(&summary, Path::new("/w"));
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
        assert!(lines[1].chars().all(|c| c == '-'));
    }

    #[test]
    fn test_root_label_relative_forms() {
        let cwd = Path::new("/a/b");
        assert_eq!(root_label(Path::new("/a/b"), cwd), ".");
        assert_eq!(root_label(Path::new("/a/b/c/d"), cwd), "c/d");
        assert_eq!(root_label(Path::new("/a"), cwd), "..");
        assert_eq!(root_label(Path::new("/a/x"), cwd), "../x");
        assert_eq!(root_label(Path::new("/"), cwd), "../..");
    }
}
