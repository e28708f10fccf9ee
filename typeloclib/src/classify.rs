//! File classification tables and rules.
//!
//! Every counted file is mapped to a short type key ("py", "sh", "make", ...)
//! by exact basename, extension, or shebang line. Files that match none of
//! the tables are not code and are skipped.

use std::path::Path;

/// Files skipped by exact basename.
pub const EXCLUDED_BASENAMES: &[&str] = &[".gitignore", ".gitattributes", ".gitmodules"];

/// Filenames treated as code even without an extension (case-sensitive).
pub const SPECIAL_FILENAMES: &[(&str, &str)] = &[
    ("Makefile", "make"),
    ("GNUmakefile", "make"),
    ("Dockerfile", "dockerfile"),
];

/// Known code extensions (lowercase, without the leading dot).
///
/// The matched table entry doubles as the file's type key.
pub const CODE_EXTENSIONS: &[&str] = &[
    "py", "pyw",
    "js", "mjs", "cjs", "jsx",
    "ts", "tsx",
    "sh", "bash", "zsh", "fish",
    "ps1", "bat", "cmd",
    "rb", "php", "pl", "pm",
    "go", "rs",
    "java", "kt", "kts", "scala",
    "swift",
    "c", "h", "cc", "cpp", "cxx", "hh", "hpp",
    "m", "mm",
    "cs",
    "r", "jl", "lua",
    "sql",
    "groovy", "gradle",
];

/// Interpreter names recognized in shebang lines, paired with the type key
/// they map to. Matched in table order, first hit wins.
pub const SHEBANG_INTERPRETERS: &[(&str, &str)] = &[
    ("python", "py"),
    ("python3", "py"),
    ("python2", "py"),
    ("bash", "sh"),
    ("sh", "sh"),
    ("zsh", "sh"),
    ("fish", "fish"),
    ("node", "js"),
    ("deno", "ts"),
    ("ruby", "rb"),
    ("perl", "pl"),
    ("php", "php"),
];

/// Decide whether a file is code and, if so, which type key it belongs to.
///
/// Rules are applied in priority order:
/// 1. Basenames in [`EXCLUDED_BASENAMES`] are never code
/// 2. [`SPECIAL_FILENAMES`] map by exact basename
/// 3. Extensions in [`CODE_EXTENSIONS`] map to themselves, lowercased
/// 4. Executable files with a recognized shebang map by interpreter
///
/// A file whose extension is unknown still gets the shebang check, so an
/// executable `run.xyz` starting with `#!/bin/bash` counts as "sh".
///
/// `first_line` is only invoked when rule 4 needs the shebang, so callers
/// can defer that read until classification actually requires it.
pub fn classify_file(
    path: &Path,
    executable: bool,
    first_line: impl FnOnce() -> Option<String>,
) -> Option<&'static str> {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if EXCLUDED_BASENAMES.contains(&name) {
            return None;
        }
        if let Some(ftype) = special_filename_type(name) {
            return Some(ftype);
        }
    }

    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        if let Some(ftype) = extension_type(ext) {
            return Some(ftype);
        }
    }

    if executable {
        if let Some(line) = first_line() {
            return interpreter_type(&line);
        }
    }

    None
}

/// Map a shebang line to a file type key.
///
/// The raw line must start with `#!`. Interpreter names are matched in
/// table order, either as a `/name` path segment or as a suffix of the
/// trimmed, lowercased line. Lines that miss the table entirely get one
/// more chance as an env-style shebang, where the interpreter is the
/// second token (`#!/usr/bin/env python3`) and must match a name exactly.
pub fn interpreter_type(first_line: &str) -> Option<&'static str> {
    if !first_line.starts_with("#!") {
        return None;
    }

    let line = first_line.trim().to_lowercase();
    for &(name, ftype) in SHEBANG_INTERPRETERS {
        let segment = format!("/{name}");
        if line.contains(&segment) || line.ends_with(name) {
            return Some(ftype);
        }
    }

    let mut parts = line.split_whitespace();
    let (Some(_), Some(target)) = (parts.next(), parts.next()) else {
        return None;
    };
    let program = target.rsplit('/').next().unwrap_or(target);
    interpreter_lookup(program)
}

/// Look up the type key for a special filename like `Makefile`.
fn special_filename_type(name: &str) -> Option<&'static str> {
    SPECIAL_FILENAMES
        .iter()
        .find(|entry| entry.0 == name)
        .map(|entry| entry.1)
}

/// Look up the type key for a file extension, ignoring case.
fn extension_type(ext: &str) -> Option<&'static str> {
    let ext = ext.to_ascii_lowercase();
    CODE_EXTENSIONS.iter().copied().find(|&candidate| candidate == ext)
}

/// Exact-name lookup in the interpreter table.
fn interpreter_lookup(program: &str) -> Option<&'static str> {
    SHEBANG_INTERPRETERS
        .iter()
        .find(|entry| entry.0 == program)
        .map(|entry| entry.1)
}
