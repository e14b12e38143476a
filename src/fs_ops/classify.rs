//! Path classification: does a path exist, and is it a directory?
//!
//! Symlinks are followed so a link to a directory behaves like that directory.
//! A dangling symlink still occupies its name, so it is reported as an
//! existing file: renaming over it must go through the confirmation gate.

use std::fs;
use std::io;
use std::path::Path;

use crate::errors::Result;

use super::helpers::io_error_with_help;

/// Pre-existing state of a path at the moment it was inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreExisting {
    Absent,
    ExistingFile,
    ExistingDirectory,
}

/// Classify `path` as absent, an existing non-directory, or an existing directory.
pub fn classify(path: &Path) -> Result<PreExisting> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(PreExisting::ExistingDirectory),
        Ok(_) => Ok(PreExisting::ExistingFile),
        Err(e) if e.kind() == io::ErrorKind::NotFound => match fs::symlink_metadata(path) {
            Ok(_) => Ok(PreExisting::ExistingFile),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(PreExisting::Absent),
            Err(e) => Err(io_error_with_help("inspect", path)(e)),
        },
        Err(e) => Err(io_error_with_help("inspect", path)(e)),
    }
}
