//! Pattern expansion for bulk moves.
//! Lists one directory (no recursion) in its native order and keeps the
//! non-directory entries whose name contains a match for the pattern.

use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::errors::{Result, SmvError};

/// A compiled pattern plus the directory it is applied to.
#[derive(Debug, Clone)]
pub struct PatternSpec {
    pub regex: Regex,
    pub search_dir: PathBuf,
}

impl PatternSpec {
    /// Compile `raw`; a malformed expression is a precondition error.
    pub fn new(raw: &str, search_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            regex: compile_pattern(raw)?,
            search_dir: search_dir.into(),
        })
    }

    pub fn raw(&self) -> &str {
        self.regex.as_str()
    }
}

pub fn compile_pattern(raw: &str) -> Result<Regex> {
    Regex::new(raw).map_err(|source| SmvError::InvalidPattern {
        pattern: raw.to_string(),
        source,
    })
}

/// Names of the entries in `dir` that match `pattern` and are not directories,
/// in directory-listing order. No match yields an empty vector.
pub fn expand(pattern: &Regex, dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    // walkdir yields entries in read_dir order unless a sort is requested.
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| SmvError::Listing {
            dir: dir.to_path_buf(),
            message: e.to_string(),
        })?;

        // file_type() comes from lstat: a symlink to a directory is not a directory here.
        if entry.file_type().is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            debug!(path = %entry.path().display(), "skipping non UTF-8 name");
            continue;
        };
        if pattern.is_match(name) {
            names.push(name.to_string());
        }
    }

    debug!(pattern = pattern.as_str(), dir = %dir.display(), matched = names.len(), "pattern expanded");
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn partial_match_not_full_match() {
        let td = assert_fs::TempDir::new().unwrap();
        td.child("report-2024.csv").touch().unwrap();
        td.child("notes.md").touch().unwrap();
        let re = compile_pattern("2024").unwrap();
        assert_eq!(expand(&re, td.path()).unwrap(), vec!["report-2024.csv".to_string()]);
    }

    #[test]
    fn directories_are_skipped_even_when_matching() {
        let td = assert_fs::TempDir::new().unwrap();
        td.child("logs.txt").create_dir_all().unwrap();
        td.child("real.txt").touch().unwrap();
        let re = compile_pattern(r"\.txt$").unwrap();
        assert_eq!(expand(&re, td.path()).unwrap(), vec!["real.txt".to_string()]);
    }

    #[test]
    fn malformed_pattern_is_rejected() {
        let err = compile_pattern("([a-z").unwrap_err();
        assert!(matches!(err, SmvError::InvalidPattern { .. }));
        assert_eq!(err.code(), 6);
    }

    #[test]
    fn missing_directory_is_a_listing_error() {
        let td = assert_fs::TempDir::new().unwrap();
        let re = compile_pattern(".").unwrap();
        let err = expand(&re, &td.path().join("absent")).unwrap_err();
        assert!(matches!(err, SmvError::Listing { .. }), "got {err:?}");
    }
}
