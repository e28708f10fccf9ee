//! # typeloclib
//!
//! A lines-of-code counter library that groups files by type.
//!
//! ## Overview
//!
//! Unlike language-aware LOC counters, this library answers a simpler
//! question: how much code of each kind lives under a directory? It walks
//! a tree once, maps every file to a short type key, and sums raw line
//! counts per type:
//!
//! - **Extensions**: `.py`, `.rs`, `.sql`, ... map to themselves
//! - **Special filenames**: `Makefile`, `GNUmakefile`, `Dockerfile`
//! - **Shebangs**: executable files classified by interpreter line
//! - **Pruning**: build output, caches, and vendored dependency
//!   directories are skipped wholesale
//!
//! Unreadable files never abort a scan, and file content does not have
//! to be valid UTF-8.
//!
//! ## Example
//!
//! ```rust
//! use typeloclib::{render_report, scan, ScanOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("tool.py"), "import sys\nprint(\"hi\")\n").unwrap();
//! fs::write(dir.path().join("notes.txt"), "not code\n").unwrap();
//!
//! let summary = scan(dir.path(), ScanOptions::new()).unwrap();
//! assert_eq!(summary.total.lines, 2);
//! assert_eq!(summary.total.files, 1);
//! assert_eq!(summary.by_type["py"].files, 1);
//!
//! let report = render_report(&summary, &std::env::current_dir().unwrap());
//! assert!(report.contains("TOTAL"));
//! ```

pub mod classify;
pub mod count;
pub mod error;
pub mod report;
pub mod scanner;
pub mod stats;
pub mod walk;

pub use classify::{classify_file, interpreter_type};
pub use count::{count_file, LineMode};
pub use error::TypelocError;
pub use report::render_report;
pub use scanner::{scan, ScanOptions};
pub use stats::{ScanSummary, TypeCount, TypeRow};
pub use walk::walk_files;

/// Result type for typeloclib operations
pub type Result<T> = std::result::Result<T, TypelocError>;
