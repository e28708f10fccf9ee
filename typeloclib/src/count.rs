//! Line counting over raw bytes.
//!
//! Lines are `\n`-delimited and a final unterminated line still counts.
//! File content never has to be valid UTF-8: the non-blank test decodes
//! each line lossily, everything else works on bytes.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::TypelocError;
use crate::Result;

/// Cap on the shebang probe, enough for any real interpreter line.
const FIRST_LINE_CAP: u64 = 512;

/// Which lines to count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineMode {
    /// Every line, including blank ones
    #[default]
    All,
    /// Only lines with at least one non-whitespace character
    NonBlank,
}

/// Count the lines of a single file.
pub fn count_file(path: impl AsRef<Path>, mode: LineMode) -> Result<u64> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TypelocError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);

    let mut lines = 0u64;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| TypelocError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;
        if read == 0 {
            break;
        }
        match mode {
            LineMode::All => lines += 1,
            LineMode::NonBlank => {
                let text = String::from_utf8_lossy(&buf);
                if !text.trim().is_empty() {
                    lines += 1;
                }
            }
        }
    }

    Ok(lines)
}

/// Read the first line of a file for shebang detection.
///
/// Reads at most [`FIRST_LINE_CAP`] bytes, decoded lossily. Returns
/// `None` when the file cannot be opened or is empty.
pub(crate) fn read_first_line(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file).take(FIRST_LINE_CAP);
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf).ok()?;
    if buf.is_empty() {
        return None;
    }
    Some(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_bytes(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_counts_all_lines() {
        let temp = tempdir().unwrap();
        let path = write_bytes(temp.path(), "a.py", b"a = 1\n\nb = 2\n");

        assert_eq!(count_file(&path, LineMode::All).unwrap(), 3);
    }

    #[test]
    fn test_counts_non_blank_lines() {
        let temp = tempdir().unwrap();
        let path = write_bytes(temp.path(), "a.py", b"a = 1\n\nb = 2\n");

        assert_eq!(count_file(&path, LineMode::NonBlank).unwrap(), 2);
    }

    #[test]
    fn test_whitespace_only_lines_are_blank() {
        let temp = tempdir().unwrap();
        let path = write_bytes(temp.path(), "a.sh", b"   \n\t\n");

        assert_eq!(count_file(&path, LineMode::All).unwrap(), 2);
        assert_eq!(count_file(&path, LineMode::NonBlank).unwrap(), 0);
    }

    #[test]
    fn test_final_line_without_terminator() {
        let temp = tempdir().unwrap();
        let path = write_bytes(temp.path(), "a.js", b"one\ntwo");

        assert_eq!(count_file(&path, LineMode::All).unwrap(), 2);
        assert_eq!(count_file(&path, LineMode::NonBlank).unwrap(), 2);
    }

    #[test]
    fn test_empty_file() {
        let temp = tempdir().unwrap();
        let path = write_bytes(temp.path(), "a.rb", b"");

        assert_eq!(count_file(&path, LineMode::All).unwrap(), 0);
        assert_eq!(count_file(&path, LineMode::NonBlank).unwrap(), 0);
    }

    #[test]
    fn test_invalid_utf8_is_tolerated() {
        let temp = tempdir().unwrap();
        let path = write_bytes(temp.path(), "a.c", b"caf\xc3\xa9\n\xff\xfe\n");

        assert_eq!(count_file(&path, LineMode::All).unwrap(), 2);
        // Malformed bytes decode to replacement characters, which are not
        // whitespace
        assert_eq!(count_file(&path, LineMode::NonBlank).unwrap(), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let temp = tempdir().unwrap();
        let path = write_bytes(temp.path(), "a.bat", b"a\r\n\r\nb\r\n");

        assert_eq!(count_file(&path, LineMode::All).unwrap(), 3);
        assert_eq!(count_file(&path, LineMode::NonBlank).unwrap(), 2);
    }

    #[test]
    fn test_missing_file_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.py");

        let result = count_file(&path, LineMode::All);
        if let Err(TypelocError::FileRead { path: err_path, .. }) = result {
            assert_eq!(err_path, path);
        } else {
            panic!("Expected FileRead error");
        }
    }

    #[test]
    fn test_read_first_line() {
        let temp = tempdir().unwrap();
        let path = write_bytes(temp.path(), "tool", b"#!/bin/sh\necho hi\n");

        assert_eq!(read_first_line(&path), Some("#!/bin/sh\n".to_string()));
    }

    #[test]
    fn test_read_first_line_missing_or_empty() {
        let temp = tempdir().unwrap();
        let empty = write_bytes(temp.path(), "empty", b"");

        assert_eq!(read_first_line(&empty), None);
        assert_eq!(read_first_line(&temp.path().join("missing")), None);
    }

    #[test]
    fn test_read_first_line_is_capped() {
        let temp = tempdir().unwrap();
        let long = vec![b'a'; 2048];
        let path = write_bytes(temp.path(), "giant", &long);

        let line = read_first_line(&path).unwrap();
        assert_eq!(line.len(), FIRST_LINE_CAP as usize);
    }
}
