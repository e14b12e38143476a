//! The rename primitive, behind a small trait so the session can be driven
//! with a dry-run (recording) mutator.
//! - Performs a rename with context-rich errors.
//! - On Windows, removes an existing destination first (MoveFile doesn't overwrite).
//! - On Unix, best-effort fsync of the destination directory after rename.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::errors::Result;

use super::helpers::mutation_error;

/// Performs the filesystem mutation for a confirmed move.
pub trait Mutator {
    fn rename(&mut self, from: &Path, to: &Path) -> Result<()>;
}

/// Real renames via `fs::rename`.
#[derive(Debug, Default)]
pub struct RenameMutator;

impl Mutator for RenameMutator {
    fn rename(&mut self, from: &Path, to: &Path) -> Result<()> {
        try_atomic_move(from, to)?;
        info!(src = %from.display(), dest = %to.display(), "Renamed file atomically");
        Ok(())
    }
}

/// Touches nothing; remembers every rename it was asked to perform.
#[derive(Debug, Default)]
pub struct DryRunMutator {
    pub planned: Vec<(PathBuf, PathBuf)>,
}

impl Mutator for DryRunMutator {
    fn rename(&mut self, from: &Path, to: &Path) -> Result<()> {
        info!(src = %from.display(), dest = %to.display(), "dry-run: would move file");
        self.planned.push((from.to_path_buf(), to.to_path_buf()));
        Ok(())
    }
}

pub fn try_atomic_move(src: &Path, dst: &Path) -> Result<()> {
    // Windows: the overwrite was confirmed already, and rename won't replace there.
    #[cfg(windows)]
    {
        if let Err(e) = fs::remove_file(dst) {
            if e.kind() != std::io::ErrorKind::NotFound {
                return Err(mutation_error(src, dst)(e));
            }
        }
    }

    fs::rename(src, dst).map_err(mutation_error(src, dst))?;

    // Unix: fsync the destination directory to persist the rename (best-effort).
    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        // Ignore fsync errors to avoid turning a successful rename into a failure.
        let _ = fsync_dir(parent);
    }

    Ok(())
}

#[cfg(unix)]
fn fsync_dir(dir: &Path) -> std::io::Result<()> {
    let f = fs::File::open(dir)?;
    f.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SmvError;
    use assert_fs::prelude::*;

    #[test]
    fn rename_replaces_existing_destination() {
        let td = assert_fs::TempDir::new().unwrap();
        let src = td.child("new.txt");
        src.write_str("new").unwrap();
        let dst = td.child("old.txt");
        dst.write_str("old").unwrap();

        RenameMutator.rename(src.path(), dst.path()).unwrap();
        assert!(!src.path().exists());
        assert_eq!(std::fs::read_to_string(dst.path()).unwrap(), "new");
    }

    #[test]
    fn rename_into_missing_directory_is_a_mutation_error() {
        let td = assert_fs::TempDir::new().unwrap();
        let src = td.child("a.txt");
        src.touch().unwrap();
        let err = RenameMutator
            .rename(src.path(), &td.path().join("no_such_dir").join("a.txt"))
            .unwrap_err();
        assert!(matches!(err, SmvError::Mutation { .. }), "got {err:?}");
        assert!(src.path().exists());
    }

    #[test]
    fn dry_run_records_without_touching() {
        let td = assert_fs::TempDir::new().unwrap();
        let src = td.child("a.txt");
        src.touch().unwrap();
        let mut m = DryRunMutator::default();
        m.rename(src.path(), &td.path().join("b.txt")).unwrap();
        assert!(src.path().exists());
        assert_eq!(m.planned.len(), 1);
    }
}
