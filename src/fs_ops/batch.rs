//! Batch planning for pattern mode.
//!
//! `plan` checks the target directory once, up front, and then hands back a
//! lazy iterator: each file is resolved only when the caller pulls it, so a
//! file is resolved, confirmed and moved before the next one is looked at.
//! A file that fails to resolve is yielded with its error and iteration goes on.

use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::{Result, SmvError};

use super::classify::{PreExisting, classify};
use super::resolve::{ResolvedMove, absolutize_from, resolve_from};

/// Fail unless `target_dir` exists and is a directory.
pub fn ensure_target_dir(target_dir: &Path) -> Result<()> {
    match classify(target_dir)? {
        PreExisting::ExistingDirectory => Ok(()),
        _ => Err(SmvError::TargetNotDirectory(target_dir.to_path_buf())),
    }
}

/// One file of a batch and the outcome of resolving it.
#[derive(Debug)]
pub struct PlannedMove {
    pub file: String,
    pub resolution: Result<ResolvedMove>,
}

/// Lazy, ordered resolutions for a batch. Created by [`plan`].
#[derive(Debug)]
pub struct BatchPlan {
    files: std::vec::IntoIter<String>,
    cwd: PathBuf,
    search_dir: PathBuf,
    target_dir: PathBuf,
}

impl Iterator for BatchPlan {
    type Item = PlannedMove;

    fn next(&mut self) -> Option<PlannedMove> {
        let file = self.files.next()?;
        let source = self.search_dir.join(&file);
        let resolution = resolve_from(&self.cwd, &source, &self.target_dir);
        if let Err(e) = &resolution {
            debug!(file = %file, kind = e.kind(), error = %e, "could not resolve batch entry");
        }
        Some(PlannedMove { file, resolution })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.files.size_hint()
    }
}

/// Plan moving `files` (names inside `search_dir`) into `target_dir`.
/// Returns an error, and no entries at all, when the target is not an existing directory.
pub fn plan(files: Vec<String>, search_dir: &Path, target_dir: &Path) -> Result<BatchPlan> {
    let cwd = env::current_dir().map_err(|e| SmvError::Io {
        context: "determine current directory".into(),
        source: e,
    })?;
    plan_from(&cwd, files, search_dir, target_dir)
}

/// [`plan`] with relative paths interpreted against `cwd`.
pub fn plan_from(cwd: &Path, files: Vec<String>, search_dir: &Path, target_dir: &Path) -> Result<BatchPlan> {
    let target_dir = absolutize_from(cwd, target_dir);
    ensure_target_dir(&target_dir)?;
    debug!(count = files.len(), target = %target_dir.display(), "batch planned");

    Ok(BatchPlan {
        files: files.into_iter(),
        cwd: cwd.to_path_buf(),
        search_dir: absolutize_from(cwd, search_dir),
        target_dir,
    })
}

/// Terminal state of one batch entry.
#[derive(Debug)]
pub enum Outcome {
    Moved,
    Aborted,
    /// Source and destination were already the same path.
    Unchanged,
    Failed(SmvError),
}

#[derive(Debug)]
pub struct BatchEntry {
    pub file: String,
    pub outcome: Outcome,
}

/// Per-file outcomes in discovery order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    /// True when the pattern matched nothing.
    pub fn is_no_match(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, file: String, outcome: Outcome) {
        self.entries.push(BatchEntry { file, outcome });
    }

    pub fn moved(&self) -> usize {
        self.entries.iter().filter(|e| matches!(e.outcome, Outcome::Moved)).count()
    }

    pub fn aborted(&self) -> usize {
        self.entries.iter().filter(|e| matches!(e.outcome, Outcome::Aborted)).count()
    }

    pub fn unchanged(&self) -> usize {
        self.entries.iter().filter(|e| matches!(e.outcome, Outcome::Unchanged)).count()
    }

    pub fn failed(&self) -> usize {
        self.entries.iter().filter(|e| matches!(e.outcome, Outcome::Failed(_))).count()
    }
}
