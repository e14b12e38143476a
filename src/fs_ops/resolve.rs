//! Move resolution.
//! - Checks that the source is an existing non-directory entry.
//! - Resolves the target to an absolute, lexically normalised path.
//! - A directory target receives the source's basename; anything else is used verbatim.
//! - Classifies whatever sits at the final destination.
//!
//! Notes:
//! - Read-only: nothing here touches the filesystem beyond metadata queries.
//! - The snapshot is not re-validated before the rename (single-user CLI).

use std::env;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::errors::{Result, SmvError};

use super::classify::{PreExisting, classify};
use super::helpers::io_error_with_help;

/// A fully resolved (source, destination) pair plus what already lives at the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMove {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub existing: PreExisting,
    /// True when the target was an existing directory and the basename was appended.
    pub into_directory: bool,
}

impl ResolvedMove {
    /// Basename carried over from the source.
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Fail unless `source` exists and is not a directory.
/// Symlinks are not followed: a link is moved as the link itself.
pub fn ensure_movable_source(source: &Path) -> Result<()> {
    match fs::symlink_metadata(source) {
        Ok(meta) if meta.file_type().is_dir() => Err(SmvError::SourceIsDirectory(source.to_path_buf())),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(SmvError::SourceNotFound(source.to_path_buf())),
        Err(e) => Err(io_error_with_help("inspect source", source)(e)),
    }
}

/// Resolve a move relative to the process working directory.
pub fn resolve(source: &Path, target: &Path) -> Result<ResolvedMove> {
    let cwd = env::current_dir().map_err(|e| SmvError::Io {
        context: "determine current directory".into(),
        source: e,
    })?;
    resolve_from(&cwd, source, target)
}

/// Resolve a move with relative paths interpreted against `cwd`.
pub fn resolve_from(cwd: &Path, source: &Path, target: &Path) -> Result<ResolvedMove> {
    let source = absolutize_from(cwd, source);
    ensure_movable_source(&source)?;

    let target = absolutize_from(cwd, target);
    let resolved = match classify(&target)? {
        PreExisting::ExistingDirectory => {
            let name = source
                .file_name()
                .ok_or_else(|| SmvError::SourceNotFound(source.clone()))?;
            // Path::join supplies exactly one separator whatever the caller typed.
            let destination = target.join(name);
            let existing = classify(&destination)?;
            ResolvedMove {
                source,
                destination,
                existing,
                into_directory: true,
            }
        }
        existing => ResolvedMove {
            source,
            destination: target,
            existing,
            into_directory: false,
        },
    };

    debug!(
        src = %resolved.source.display(),
        dest = %resolved.destination.display(),
        existing = ?resolved.existing,
        into_directory = resolved.into_directory,
        "resolved move"
    );
    Ok(resolved)
}

/// Join `path` onto `base` (unless already absolute) and fold `.` and `..` lexically.
/// `..` at the root stays at the root.
pub fn absolutize_from(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for comp in joined.components() {
        match comp {
            Component::Prefix(_) | Component::RootDir => out.push(comp.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}
